//! Typed views over resources resolved through a [`ResourceResolver`].
//!
//! These are free functions: the resolver is passed in, nothing is cached, and
//! every call resolves the identifier again. Streams opened here are dropped
//! before the function returns, on success and on error alike.

use std::io::{self, Read};

use encoding_rs::UTF_8;
use java_properties::PropertiesIter;
use url::Url;

use crate::domain::{AppError, PropertyMap, listing};
use crate::ports::{ResourceResolver, ResourceStream};

const READ_BUFFER_SIZE: usize = 1024;

/// Read the whole resource and decode it as UTF-8.
///
/// Malformed sequences decode to U+FFFD instead of failing.
pub fn read_as_text<R>(resolver: &R, id: &str) -> Result<String, AppError>
where
    R: ResourceResolver + ?Sized,
{
    let content = read_bytes(resolver, id)?;
    Ok(String::from_utf8_lossy(&content).into_owned())
}

/// Parse the resource as a `key=value` property file.
///
/// Input bytes are ISO-8859-1; anything outside it comes from `\uXXXX` escapes.
pub fn read_as_key_value_map<R>(resolver: &R, id: &str) -> Result<PropertyMap, AppError>
where
    R: ResourceResolver + ?Sized,
{
    let content = read_bytes(resolver, id)?;
    let latin1: String = content.iter().map(|&byte| char::from(byte)).collect();

    let mut properties = PropertyMap::new();
    PropertiesIter::new_with_encoding(latin1.as_bytes(), UTF_8)
        .read_into(|key, value| {
            properties.insert(key, value);
        })
        .map_err(|source| AppError::PropertiesParse { resource: id.to_string(), source })?;
    Ok(properties)
}

/// Open the resource; the caller owns (and eventually drops) the stream.
pub fn open_stream<R>(resolver: &R, id: &str) -> Result<ResourceStream, AppError>
where
    R: ResourceResolver + ?Sized,
{
    resolver.open(id)?.ok_or_else(|| AppError::not_found(id))
}

/// Resolve the resource to an absolute URI without reading it.
pub fn resolve_location<R>(resolver: &R, id: &str) -> Result<Url, AppError>
where
    R: ResourceResolver + ?Sized,
{
    let raw = resolver.location(id).ok_or_else(|| AppError::not_found(id))?;
    Url::parse(&raw)
        .map_err(|source| AppError::LocationConversion { resource: id.to_string(), source })
}

/// Read the manifest at `path` and return one entry per line.
///
/// Lines are returned in order and untouched: blank lines become empty entries.
pub fn list_child_names<R>(resolver: &R, path: &str) -> Result<Vec<String>, AppError>
where
    R: ResourceResolver + ?Sized,
{
    let text = read_as_text(resolver, path)?;
    Ok(listing::split_lines(&text))
}

fn read_bytes<R>(resolver: &R, id: &str) -> Result<Vec<u8>, AppError>
where
    R: ResourceResolver + ?Sized,
{
    let mut stream = open_stream(resolver, id)?;
    let mut content = Vec::new();
    let mut buffer = [0u8; READ_BUFFER_SIZE];

    loop {
        match stream.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => content.extend_from_slice(&buffer[..read]),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(content)
}
