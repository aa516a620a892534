// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! String resources.
//!
//! Translations are ASCII transliterations, since the bitmap font only covers ASCII.

use std::borrow::Cow;

use snapmatrix::{Locale, StringId};

/// Fraction by which the pseudo-locale lengthens a string, before brackets.
const PSEUDO_EXPANSION: f32 = 0.4;
const PSEUDO_PADDING: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

fn en_us(id: StringId) -> &'static str {
    match id {
        StringId::Title => "Notifications",
        StringId::Subtitle => "Alerts, sounds and badges",
        StringId::Description => {
            "Choose which apps can send you alerts. Quiet hours silence everything except calls from favorites."
        }
        StringId::Action => "Manage apps",
        StringId::Status => "3 new since 09:41",
        StringId::Empty => "Nothing to show yet",
    }
}

fn de_de(id: StringId) -> &'static str {
    match id {
        StringId::Title => "Benachrichtigungen",
        StringId::Subtitle => "Hinweise, Toene und Kennzeichen",
        StringId::Description => {
            "Waehle aus, welche Apps dir Hinweise senden duerfen. Ruhezeiten schalten alles stumm ausser Anrufen von Favoriten."
        }
        StringId::Action => "Apps verwalten",
        StringId::Status => "3 neu seit 09:41",
        StringId::Empty => "Noch nichts vorhanden",
    }
}

fn es_es(id: StringId) -> &'static str {
    match id {
        StringId::Title => "Notificaciones",
        StringId::Subtitle => "Alertas, sonidos y globos",
        StringId::Description => {
            "Elige que aplicaciones pueden enviarte alertas. Las horas de silencio silencian todo salvo las llamadas de favoritos."
        }
        StringId::Action => "Gestionar aplicaciones",
        StringId::Status => "3 nuevas desde las 09:41",
        StringId::Empty => "Todavia no hay nada",
    }
}

/// Pads `text` with counting words until it is at least 40% longer, then brackets it.
fn pseudo(text: &str) -> String {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "resource strings are short; the expansion is a small positive count"
    )]
    let target = text.len() + (text.len() as f32 * PSEUDO_EXPANSION).ceil() as usize;
    let mut out = String::with_capacity(target + 2);
    out.push('[');
    out.push_str(text);
    for word in PSEUDO_PADDING.iter().cycle() {
        if out.len() - 1 >= target {
            break;
        }
        out.push(' ');
        out.push_str(word);
    }
    out.push(']');
    out
}

/// Looks up the text for `id` in `locale`.
#[must_use]
pub fn resolve(locale: Locale, id: StringId) -> Cow<'static, str> {
    match locale {
        Locale::EnUs => Cow::Borrowed(en_us(id)),
        Locale::DeDe => Cow::Borrowed(de_de(id)),
        Locale::EsEs => Cow::Borrowed(es_es(id)),
        Locale::Pseudo => Cow::Owned(pseudo(en_us(id))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::glyph;

    const IDS: [StringId; 6] = [
        StringId::Title,
        StringId::Subtitle,
        StringId::Description,
        StringId::Action,
        StringId::Status,
        StringId::Empty,
    ];

    #[test]
    fn every_string_is_drawable() {
        for locale in Locale::ALL {
            for id in IDS {
                let text = resolve(locale, id);
                assert!(!text.is_empty(), "{locale:?}/{id:?} is empty");
                for c in text.chars() {
                    assert!(
                        glyph(c).is_some(),
                        "{locale:?}/{id:?} uses `{c}`, which has no glyph"
                    );
                }
            }
        }
    }

    #[test]
    fn pseudo_locale_expands_and_brackets() {
        for id in IDS {
            let en = resolve(Locale::EnUs, id);
            let xa = resolve(Locale::Pseudo, id);
            assert!(xa.starts_with('[') && xa.ends_with(']'), "{xa}");
            assert!(
                xa.len() as f32 >= en.len() as f32 * (1.0 + PSEUDO_EXPANSION),
                "`{xa}` is not long enough"
            );
            assert!(xa.contains(en.as_ref()));
        }
        assert_eq!(pseudo("Hi"), "[Hi one]");
    }

    #[test]
    fn translations_differ_from_english() {
        for locale in [Locale::DeDe, Locale::EsEs] {
            assert_ne!(resolve(locale, StringId::Title), resolve(Locale::EnUs, StringId::Title));
        }
    }
}
