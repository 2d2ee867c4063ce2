//! String conversion utilities.

/// Returns the part of an email address before the first `@`.
///
/// Addresses without an `@` are returned whole.
///
/// # Examples
///
/// ```
/// use gcms_domain::common::email_local_part;
///
/// assert_eq!(email_local_part("jane.doe@agency.gov"), "jane.doe");
/// assert_eq!(email_local_part("no-at-sign"), "no-at-sign");
/// assert_eq!(email_local_part("@example.com"), "");
/// ```
pub fn email_local_part(email: &str) -> &str {
    match email.split_once('@') {
        Some((local, _)) => local,
        None => email,
    }
}
