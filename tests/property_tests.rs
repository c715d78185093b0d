//! Property-based tests for rust_console_logger using proptest

use proptest::prelude::*;
use rust_console_logger::prelude::*;

const KNOWN_NAMES: [&str; 5] = ["error", "warn", "warning", "info", "debug"];

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Disable),
        Just(LogLevel::Error),
        Just(LogLevel::Warn),
        Just(LogLevel::Info),
        Just(LogLevel::Debug),
    ]
}

fn any_style() -> impl Strategy<Value = PrefixStyle> {
    prop_oneof![Just(PrefixStyle::Short), Just(PrefixStyle::Long)]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Anything that is not one of the documented tokens disables logging
    #[test]
    fn test_unknown_names_disable(name in ".*") {
        prop_assume!(!KNOWN_NAMES.contains(&name.as_str()));
        prop_assert_eq!(LogLevel::from_name(&name), LogLevel::Disable);
    }

    /// Upper-cased tokens are not accepted
    #[test]
    fn test_uppercase_names_disable(index in 0..KNOWN_NAMES.len()) {
        let name = KNOWN_NAMES[index].to_uppercase();
        prop_assert_eq!(LogLevel::from_name(&name), LogLevel::Disable);
    }

    /// Canonical names parse back to their level
    #[test]
    fn test_name_roundtrip(level in any_level()) {
        prop_assume!(level != LogLevel::Disable);
        prop_assert_eq!(LogLevel::from_name(level.name()), level);
    }

    /// Level ordering agrees with the ordinals
    #[test]
    fn test_ordering_matches_ordinals(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, a.as_u32() <= b.as_u32());
        prop_assert_eq!(a < b, a.as_u32() < b.as_u32());
        prop_assert_eq!(a.cmp(&b), a.as_u32().cmp(&b.as_u32()));
    }

    /// The permit rule is `level <= threshold` with Disable excluded on both sides
    #[test]
    fn test_permit_rule(threshold in any_level(), level in any_level()) {
        let expected = threshold != LogLevel::Disable
            && level != LogLevel::Disable
            && level.as_u32() <= threshold.as_u32();
        prop_assert_eq!(threshold.permits(level), expected);
    }

    /// Ordinals outside the enumeration have no level
    #[test]
    fn test_out_of_range_ordinals(value in 5u32..=u32::MAX) {
        prop_assert_eq!(LogLevel::from_u32(value), None);
    }
}

// ============================================================================
// PrefixTable Tests
// ============================================================================

proptest! {
    /// Plain prefixes never carry escape sequences
    #[test]
    fn test_plain_prefix_has_no_escapes(style in any_style(), level in any_level()) {
        let table = PrefixTable::new(style);
        prop_assert!(!table.render(level, false).contains('\x1b'));
    }

    /// Colored prefixes contain the plain text
    #[test]
    fn test_colored_contains_plain(style in any_style(), level in any_level()) {
        let table = PrefixTable::new(style);
        let plain = table.render(level, false);
        let colored = table.render(level, true);
        prop_assert!(colored.contains(plain));
        prop_assert_eq!(plain.is_empty(), colored.is_empty());
    }

    /// Rendering is idempotent
    #[test]
    fn test_render_idempotent(style in any_style(), level in any_level(), color in any::<bool>()) {
        let table = PrefixTable::new(style);
        let first = table.render(level, color).to_string();
        let second = table.render(level, color).to_string();
        prop_assert_eq!(first, second);
    }

    /// Every level uses the same wording style
    #[test]
    fn test_style_consistency(use_short in any::<bool>(), level in any_level()) {
        prop_assume!(level != LogLevel::Disable);
        let table = PrefixTable::from_preferences(&Preferences { use_short_messages: use_short });
        let prefix = table.render(level, false);
        if use_short {
            prop_assert_eq!(prefix.len(), 6);
        } else {
            prop_assert!(prefix.len() > 6);
        }
    }

    /// Unknown ordinals render as an empty prefix
    #[test]
    fn test_unknown_ordinal_renders_empty(style in any_style(), value in 5u32..=u32::MAX, color in any::<bool>()) {
        let table = PrefixTable::new(style);
        prop_assert_eq!(table.render_value(value, color), "");
    }
}
