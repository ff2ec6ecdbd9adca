// ABOUTME: Theme definitions for the deckgen application
// ABOUTME: Named color palettes expressed as style tokens, plus the built-in catalog

use crate::style::{Palette, StyleAxis};
use std::borrow::Cow;

/// A named visual palette. Themes are never mutated once selected; switching
/// themes means passing a different `Theme`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: Cow<'static, str>,
    pub background: Cow<'static, str>,
    pub text_color: Cow<'static, str>,
    pub title_color: Cow<'static, str>,
    pub bullet_color: Cow<'static, str>,
}

impl Theme {
    const fn builtin(
        name: &'static str,
        background: &'static str,
        text_color: &'static str,
        title_color: &'static str,
        bullet_color: &'static str,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            background: Cow::Borrowed(background),
            text_color: Cow::Borrowed(text_color),
            title_color: Cow::Borrowed(title_color),
            bullet_color: Cow::Borrowed(bullet_color),
        }
    }

    /// Resolve every style axis of this theme to a concrete color.
    pub fn palette(&self) -> Palette {
        Palette {
            background: StyleAxis::Background.resolve(&self.background),
            text: StyleAxis::Text.resolve(&self.text_color),
            title: StyleAxis::Title.resolve(&self.title_color),
            bullet: StyleAxis::Bullet.resolve(&self.bullet_color),
        }
    }

    /// Look up a built-in theme by name, ignoring case.
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        THEMES.iter().find(|t| t.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl Default for Theme {
    fn default() -> Self {
        THEMES[0].clone()
    }
}

pub static THEMES: &[Theme] = &[
    Theme::builtin(
        "Midnight",
        "bg-gradient-to-br from-slate-900 to-indigo-900",
        "text-slate-300",
        "text-indigo-400",
        "text-emerald-400",
    ),
    Theme::builtin(
        "Aurora",
        "bg-gradient-to-br from-indigo-900 via-purple-900 to-slate-900",
        "text-gray-200",
        "text-teal-300",
        "text-cyan-400",
    ),
    Theme::builtin(
        "Sunset",
        "bg-gradient-to-br from-red-500 to-yellow-500",
        "text-rose-100",
        "text-yellow-200",
        "text-yellow-400",
    ),
    Theme::builtin(
        "Minimal Light",
        "bg-white",
        "text-gray-600",
        "text-gray-800",
        "text-blue-600",
    ),
    Theme::builtin(
        "Forest",
        "bg-gradient-to-br from-emerald-800 to-green-900",
        "text-lime-100",
        "text-yellow-300",
        "text-lime-400",
    ),
    Theme::builtin(
        "Crimson",
        "bg-gradient-to-br from-red-800 to-red-900",
        "text-red-200",
        "text-white",
        "text-red-400",
    ),
    Theme::builtin(
        "Charcoal",
        "bg-gray-800",
        "text-gray-300",
        "text-white",
        "text-yellow-400",
    ),
    Theme::builtin(
        "Paper",
        "bg-yellow-50",
        "text-gray-700",
        "text-yellow-900",
        "text-yellow-800",
    ),
    Theme::builtin(
        "Sky",
        "bg-gradient-to-br from-sky-200 to-blue-100",
        "text-sky-900",
        "text-sky-800",
        "text-blue-600",
    ),
    Theme::builtin(
        "Blossom",
        "bg-gradient-to-br from-pink-200 to-rose-100",
        "text-gray-700",
        "text-purple-800",
        "text-purple-500",
    ),
    Theme::builtin(
        "Noir",
        "bg-black",
        "text-gray-400",
        "text-white",
        "text-gray-500",
    ),
    Theme::builtin(
        "Ocean",
        "bg-gradient-to-br from-blue-900 to-slate-900",
        "text-blue-100",
        "text-cyan-300",
        "text-cyan-400",
    ),
    Theme::builtin(
        "Neon",
        "bg-gradient-to-br from-gray-900 to-black",
        "text-gray-200",
        "text-fuchsia-500",
        "text-lime-400",
    ),
];
