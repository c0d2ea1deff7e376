use crate::error::{FetchError, Result};
use url::Url;

/// Marker that classifies an address as absolute.
const ABSOLUTE_MARKER: &str = "http://";

/// An address is absolute when it carries the plain-http scheme marker
/// anywhere in the string; everything else is resolved against its origin.
pub fn is_absolute(address: &str) -> bool {
    address.contains(ABSOLUTE_MARKER)
}

/// Resolve an address to a fetchable URL.
///
/// Absolute addresses are parsed as given; the url crate's parsing doubles
/// as the canonicalizing step that re-encodes disallowed characters.
/// Relative addresses are glued onto the origin page's address, truncated
/// after its last `/`. No `../` or `./` handling - the concatenation is
/// deliberately literal.
pub fn resolve(address: &str, origin: Option<&str>) -> Result<Url> {
    if is_absolute(address) {
        return Url::parse(address)
            .map_err(|e| FetchError::InvalidAddress(format!("{}: {}", address, e)));
    }

    let prefix = origin
        .and_then(|o| o.rfind('/').map(|i| &o[..=i]))
        .unwrap_or("");
    let glued = format!("{}{}", prefix, address);
    Url::parse(&glued).map_err(|e| FetchError::InvalidAddress(format!("{}: {}", glued, e)))
}

/// Local file name for a fetched resource: the text after the last `/` of
/// the address as given, or the whole address if it has none. A trailing
/// `/` leaves nothing to name the file with and is rejected.
pub fn local_filename(address: &str) -> Result<&str> {
    let name = match address.rfind('/') {
        Some(i) => &address[i + 1..],
        None => address,
    };
    if name.is_empty() {
        return Err(FetchError::InvalidAddress(format!(
            "no file name in '{}'",
            address
        )));
    }
    Ok(name)
}
