// Name filters
//
// Angular marks internal API by naming convention.

use once_cell::sync::Lazy;
use regex::Regex;

static ANGULAR_PRIVATE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ɵ_]").unwrap());

/// Whether a name follows the convention for Angular-private API: a leading
/// `ɵ` or `_`. Such members are hidden from public docs regardless of their
/// visibility modifier.
pub fn is_angular_private_name(name: &str) -> bool {
    ANGULAR_PRIVATE_NAME.is_match(name)
}
