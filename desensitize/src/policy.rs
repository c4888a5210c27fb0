//! Masking policies for string-like values.
//!
//! Policies are pure string transformations over Unicode scalar values. They
//! do not traverse structures or decide what is sensitive; the resolver chain
//! does that and hands individual strings here.

use std::borrow::Cow;

use crate::classification::{
    BankCard, Classification, Email, IdNumber, Password, PersonName, Phone, PostalAddress, Secret,
};

/// Default placeholder used for full masking.
pub const MASKED_PLACEHOLDER: &str = "[MASKED]";

/// How to mask a string-like value.
///
/// All variants operate on Unicode scalar values and return an owned
/// `String`; they are total and never fail.
#[derive(Clone, Debug)]
pub enum TextMaskPolicy {
    /// Replace the entire value with a fixed placeholder.
    Full {
        /// The placeholder text to use.
        placeholder: Cow<'static, str>,
    },
    /// Keep `prefix` leading and `suffix` trailing characters visible and
    /// mask everything between them. When the kept spans cover the whole
    /// value it is returned unchanged.
    KeepEnds {
        /// Leading characters kept in clear text.
        prefix: usize,
        /// Trailing characters kept in clear text.
        suffix: usize,
        /// Symbol written over the hidden middle.
        mask_char: char,
    },
    /// Mask `prefix` leading and `suffix` trailing characters and leave the
    /// middle untouched. When the masked spans cover the whole value, every
    /// character is masked.
    MaskEnds {
        /// Leading characters to mask.
        prefix: usize,
        /// Trailing characters to mask.
        suffix: usize,
        /// Symbol written over the masked spans.
        mask_char: char,
    },
}

impl TextMaskPolicy {
    /// Full masking with [`MASKED_PLACEHOLDER`].
    #[must_use]
    pub fn full() -> Self {
        Self::Full {
            placeholder: Cow::Borrowed(MASKED_PLACEHOLDER),
        }
    }

    /// Full masking with a custom placeholder.
    #[must_use]
    pub fn full_with<P>(placeholder: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        Self::Full {
            placeholder: placeholder.into(),
        }
    }

    /// Keeps only the first `prefix` characters visible.
    #[must_use]
    pub fn keep_first(prefix: usize) -> Self {
        Self::keep_ends(prefix, 0)
    }

    /// Keeps only the last `suffix` characters visible.
    #[must_use]
    pub fn keep_last(suffix: usize) -> Self {
        Self::keep_ends(0, suffix)
    }

    /// Keeps both ends visible and masks the middle.
    #[must_use]
    pub fn keep_ends(prefix: usize, suffix: usize) -> Self {
        Self::KeepEnds {
            prefix,
            suffix,
            mask_char: '*',
        }
    }

    /// Masks only the first `prefix` characters.
    #[must_use]
    pub fn mask_first(prefix: usize) -> Self {
        Self::mask_ends(prefix, 0)
    }

    /// Masks only the last `suffix` characters.
    #[must_use]
    pub fn mask_last(suffix: usize) -> Self {
        Self::mask_ends(0, suffix)
    }

    /// Masks both ends and leaves the middle untouched.
    #[must_use]
    pub fn mask_ends(prefix: usize, suffix: usize) -> Self {
        Self::MaskEnds {
            prefix,
            suffix,
            mask_char: '*',
        }
    }

    /// Overrides the masking character.
    ///
    /// Has no effect on [`TextMaskPolicy::Full`], which replaces the value
    /// with a placeholder string rather than masking characters.
    #[must_use]
    pub fn with_mask_char(mut self, symbol: char) -> Self {
        match &mut self {
            Self::Full { .. } => {}
            Self::KeepEnds { mask_char, .. } | Self::MaskEnds { mask_char, .. } => {
                *mask_char = symbol;
            }
        }
        self
    }

    /// Applies the policy to `value`.
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        match *self {
            Self::Full { ref placeholder } => placeholder.clone().into_owned(),
            Self::KeepEnds {
                prefix,
                suffix,
                mask_char,
            } => {
                let mut chars: Vec<char> = value.chars().collect();
                let total = chars.len();
                if prefix + suffix >= total {
                    return value.to_owned();
                }
                for symbol in &mut chars[prefix..total - suffix] {
                    *symbol = mask_char;
                }
                chars.into_iter().collect()
            }
            Self::MaskEnds {
                prefix,
                suffix,
                mask_char,
            } => {
                let mut chars: Vec<char> = value.chars().collect();
                let total = chars.len();
                if prefix + suffix >= total {
                    chars.fill(mask_char);
                    return chars.into_iter().collect();
                }
                for symbol in &mut chars[..prefix] {
                    *symbol = mask_char;
                }
                for symbol in &mut chars[total - suffix..] {
                    *symbol = mask_char;
                }
                chars.into_iter().collect()
            }
        }
    }
}

impl Default for TextMaskPolicy {
    fn default() -> Self {
        Self::full()
    }
}

/// Associates a classification with its concrete masking policy.
///
/// The policy is fixed per classification type and independent of runtime
/// context.
pub trait MaskPolicy: Classification {
    /// The policy applied to values classified as `Self`.
    fn policy() -> TextMaskPolicy;
}

/// The runtime annotation attached to classified declaration sites.
///
/// The derive macro turns `#[sensitive(Phone)]` into
/// `Classified::of::<Phone>()` on the field's shape; the terminal masking
/// resolver then applies the captured policy to the field's string value.
#[derive(Clone, Debug)]
pub struct Classified {
    classification: &'static str,
    policy: TextMaskPolicy,
}

impl Classified {
    /// Captures the policy of classification `C`.
    #[must_use]
    pub fn of<C: MaskPolicy + 'static>() -> Self {
        Self {
            classification: std::any::type_name::<C>(),
            policy: C::policy(),
        }
    }

    /// The classification's type name, for diagnostics.
    #[must_use]
    pub fn classification(&self) -> &'static str {
        self.classification
    }

    /// The captured policy.
    #[must_use]
    pub fn policy(&self) -> &TextMaskPolicy {
        &self.policy
    }
}

impl MaskPolicy for Secret {
    fn policy() -> TextMaskPolicy {
        TextMaskPolicy::full()
    }
}

impl MaskPolicy for Password {
    fn policy() -> TextMaskPolicy {
        TextMaskPolicy::full()
    }
}

impl MaskPolicy for PersonName {
    fn policy() -> TextMaskPolicy {
        TextMaskPolicy::keep_first(1)
    }
}

impl MaskPolicy for Phone {
    fn policy() -> TextMaskPolicy {
        TextMaskPolicy::keep_ends(3, 4)
    }
}

impl MaskPolicy for Email {
    fn policy() -> TextMaskPolicy {
        TextMaskPolicy::keep_first(2)
    }
}

impl MaskPolicy for IdNumber {
    fn policy() -> TextMaskPolicy {
        TextMaskPolicy::keep_last(4)
    }
}

impl MaskPolicy for BankCard {
    fn policy() -> TextMaskPolicy {
        TextMaskPolicy::keep_last(4)
    }
}

impl MaskPolicy for PostalAddress {
    fn policy() -> TextMaskPolicy {
        TextMaskPolicy::keep_first(6)
    }
}

#[cfg(test)]
mod tests {
    use super::{Classified, MaskPolicy, TextMaskPolicy, MASKED_PLACEHOLDER};
    use crate::classification::{IdNumber, PersonName, Phone, Secret};

    #[test]
    fn full_policy_uses_default_placeholder() {
        assert_eq!(TextMaskPolicy::full().apply_to("secret"), MASKED_PLACEHOLDER);
        assert_eq!(TextMaskPolicy::full().apply_to(""), MASKED_PLACEHOLDER);
    }

    #[test]
    fn full_policy_uses_custom_placeholder() {
        let policy = TextMaskPolicy::full_with("<hidden>");
        assert_eq!(policy.apply_to("secret"), "<hidden>");
    }

    #[test]
    fn keep_ends_masks_the_middle() {
        let policy = TextMaskPolicy::keep_ends(2, 2);
        assert_eq!(policy.apply_to("abcdef"), "ab**ef");
    }

    #[test]
    fn keep_span_covering_value_leaves_it_unchanged() {
        let policy = TextMaskPolicy::keep_ends(2, 2);
        assert_eq!(policy.apply_to("abcd"), "abcd");
        assert_eq!(policy.apply_to(""), "");
    }

    #[test]
    fn mask_ends_leaves_the_middle() {
        let policy = TextMaskPolicy::mask_ends(2, 2);
        assert_eq!(policy.apply_to("abcdef"), "**cd**");
    }

    #[test]
    fn mask_span_covering_value_masks_everything() {
        let policy = TextMaskPolicy::mask_ends(2, 2);
        assert_eq!(policy.apply_to("abc"), "***");
    }

    #[test]
    fn custom_mask_char_is_respected() {
        let policy = TextMaskPolicy::keep_first(2).with_mask_char('#');
        assert_eq!(policy.apply_to("abcdef"), "ab####");
    }

    #[test]
    fn policies_operate_on_scalar_values_not_bytes() {
        let policy = TextMaskPolicy::keep_first(2);
        assert_eq!(policy.apply_to("秘密数据"), "秘密**");
    }

    #[test]
    fn classification_policies_have_expected_defaults() {
        assert_eq!(Secret::policy().apply_to("hunter2"), MASKED_PLACEHOLDER);
        assert_eq!(Phone::policy().apply_to("13812345678"), "138****5678");
        assert_eq!(PersonName::policy().apply_to("Ann"), "A**");
        assert_eq!(IdNumber::policy().apply_to("123-45-6789"), "*******6789");
    }

    #[test]
    fn classified_captures_policy_and_name() {
        let classified = Classified::of::<Secret>();
        assert!(classified.classification().contains("Secret"));
        assert_eq!(classified.policy().apply_to("x"), MASKED_PLACEHOLDER);
    }
}
