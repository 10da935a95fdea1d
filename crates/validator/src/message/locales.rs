//! Bundled translation tables.

use super::keys;

pub(crate) const EN: &[(&str, &str)] = &[
    (keys::REQUIRED, keys::REQUIRED),
    (keys::ONE_OF, keys::ONE_OF),
    (keys::PATTERN, keys::PATTERN),
    (keys::CUSTOM, keys::CUSTOM),
    (keys::MIN_LENGTH, keys::MIN_LENGTH),
    (keys::MAX_LENGTH, keys::MAX_LENGTH),
    (keys::LENGTH, keys::LENGTH),
    (keys::MIN, keys::MIN),
    (keys::MAX, keys::MAX),
    (keys::IN_RANGE, keys::IN_RANGE),
    (keys::FIELD, keys::FIELD),
    (keys::MAP_KEY, keys::MAP_KEY),
];

pub(crate) const JA: &[(&str, &str)] = &[
    (keys::REQUIRED, "必須です"),
    (keys::ONE_OF, "{0}のいずれかでなければなりません"),
    (keys::PATTERN, "{0}のパターンに一致しなければなりません"),
    (keys::CUSTOM, "有効な値でなければなりません"),
    (keys::MIN_LENGTH, "{0}文字以上の長さが必要です"),
    (keys::MAX_LENGTH, "{0}文字以内の長さに制限されています"),
    (keys::LENGTH, "長さは{0}以上{1}以内の制限があります"),
    (keys::MIN, "{0}以上の値が必要です"),
    (keys::MAX, "{0}以下の値が必要です"),
    (keys::IN_RANGE, "{0}以上{1}以下の値が必要です"),
    (keys::FIELD, "{0}: {1}"),
    (keys::MAP_KEY, "{0}: {1}"),
];
