//! Marker types for "what kind of sensitive data is this?"
//!
//! Zero-sized types attached to declaration sites through
//! `#[sensitive(Marker)]`. They carry no runtime data; their only job is to
//! select a masking policy (see [`crate::policy`]).

/// Marker trait for sensitive-data categories.
///
/// Implement it for a unit struct to introduce a project-specific category,
/// then give the category a policy by implementing [`crate::MaskPolicy`].
pub trait Classification {}

/// Bank card or PAN numbers.
#[derive(Clone, Copy)]
pub struct BankCard;
impl Classification for BankCard {}

/// Email addresses.
#[derive(Clone, Copy)]
pub struct Email;
impl Classification for Email {}

/// Government-issued identity numbers.
#[derive(Clone, Copy)]
pub struct IdNumber;
impl Classification for IdNumber {}

/// Passwords.
#[derive(Clone, Copy)]
pub struct Password;
impl Classification for Password {}

/// Personal names.
#[derive(Clone, Copy)]
pub struct PersonName;
impl Classification for PersonName {}

/// Phone numbers.
#[derive(Clone, Copy)]
pub struct Phone;
impl Classification for Phone {}

/// Postal addresses.
#[derive(Clone, Copy)]
pub struct PostalAddress;
impl Classification for PostalAddress {}

/// Secrets such as API keys or private key material.
#[derive(Clone, Copy)]
pub struct Secret;
impl Classification for Secret {}
