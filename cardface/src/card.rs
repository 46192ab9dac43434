// Copyright 2026 the Cardface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card entries and their mana costs.

use alloc::format;
use alloc::string::String;
use core::fmt;

/// One card, as handed over by whatever parsed or edited it.
///
/// Fields hold plain text. The rules text may contain `\n` line breaks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardEntry {
    /// The card name. A trailing newline left over from line-based input is tolerated.
    pub name: String,
    /// The mana cost, e.g. `"2WU"`.
    pub cost: String,
    /// The full type line, e.g. `"Creature - Goblin"`.
    pub type_line: String,
    /// The main type, e.g. `"Creature"`.
    pub main_type: String,
    /// The rules text.
    pub text: String,
    /// Power, for creatures.
    pub power: Option<String>,
    /// Toughness, for creatures.
    pub toughness: Option<String>,
    /// Starting loyalty, for planeswalkers.
    pub loyalty: Option<String>,
}

impl CardEntry {
    /// The extension of rendered card files.
    pub const FILE_EXTENSION: &'static str = "ff";

    /// Creates an entry with the fields every card has.
    pub fn new(
        name: impl Into<String>,
        cost: impl Into<String>,
        type_line: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cost: cost.into(),
            type_line: type_line.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Sets the main type.
    #[must_use]
    pub fn with_main_type(mut self, main_type: impl Into<String>) -> Self {
        self.main_type = main_type.into();
        self
    }

    /// Sets power and toughness.
    #[must_use]
    pub fn with_power_toughness(
        mut self,
        power: impl Into<String>,
        toughness: impl Into<String>,
    ) -> Self {
        self.power = Some(power.into());
        self.toughness = Some(toughness.into());
        self
    }

    /// Sets starting loyalty.
    #[must_use]
    pub fn with_loyalty(mut self, loyalty: impl Into<String>) -> Self {
        self.loyalty = Some(loyalty.into());
        self
    }

    /// The name without trailing line breaks.
    pub fn display_name(&self) -> &str {
        self.name.trim_end_matches(['\n', '\r'])
    }

    /// The file name a render of this card is written to: the display name plus
    /// [`CardEntry::FILE_EXTENSION`].
    ///
    /// Path separators and control characters in the name become `_`, so the result is
    /// always a single component that stays inside the directory it is joined to. Split
    /// cards like `Fire // Ice` are written as `Fire __ Ice.ff`.
    pub fn file_name(&self) -> String {
        let stem: String = self
            .display_name()
            .chars()
            .map(|ch| match ch {
                '/' | '\\' => '_',
                ch if ch.is_control() => '_',
                ch => ch,
            })
            .collect();
        format!("{stem}.{}", Self::FILE_EXTENSION)
    }

    /// The cost, parsed.
    pub fn mana_cost(&self) -> ManaCost<'_> {
        ManaCost::new(&self.cost)
    }

    /// The text for the bottom-right stat box: `power/toughness` when both are set,
    /// otherwise the loyalty, otherwise nothing.
    pub fn stats(&self) -> Option<String> {
        match (&self.power, &self.toughness, &self.loyalty) {
            (Some(power), Some(toughness), _) if !power.is_empty() && !toughness.is_empty() => {
                Some(format!("{power}/{toughness}"))
            }
            (_, _, Some(loyalty)) if !loyalty.is_empty() => Some(loyalty.clone()),
            _ => None,
        }
    }
}

/// One of the five colors of mana.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ManaColor {
    /// `W`
    White,
    /// `U`
    Blue,
    /// `B`
    Black,
    /// `R`
    Red,
    /// `G`
    Green,
}

impl ManaColor {
    /// All colors in canonical `WUBRG` order.
    pub const ALL: [Self; 5] = [Self::White, Self::Blue, Self::Black, Self::Red, Self::Green];

    /// The letter used for this color in costs.
    pub const fn symbol(self) -> char {
        match self {
            Self::White => 'W',
            Self::Blue => 'U',
            Self::Black => 'B',
            Self::Red => 'R',
            Self::Green => 'G',
        }
    }

    /// The color a cost letter stands for.
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'W' => Some(Self::White),
            'U' => Some(Self::Blue),
            'B' => Some(Self::Black),
            'R' => Some(Self::Red),
            'G' => Some(Self::Green),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// The set of colors that appear in a cost.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorIdentity(u8);

impl ColorIdentity {
    /// No colors at all.
    pub const COLORLESS: Self = Self(0);

    /// Collects the color letters of a cost.
    pub fn from_cost(cost: &str) -> Self {
        cost.chars()
            .filter_map(ManaColor::from_symbol)
            .fold(Self::COLORLESS, Self::with)
    }

    /// Adds a color.
    #[must_use]
    pub const fn with(self, color: ManaColor) -> Self {
        Self(self.0 | color.bit())
    }

    /// Whether `color` is present.
    pub const fn contains(self, color: ManaColor) -> bool {
        self.0 & color.bit() != 0
    }

    /// The number of distinct colors.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether no color is present.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The present colors in `WUBRG` order.
    pub fn iter(self) -> impl Iterator<Item = ManaColor> {
        ManaColor::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl fmt::Display for ColorIdentity {
    /// Writes the color letters in `WUBRG` order, or `C` for colorless.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;

        if self.is_empty() {
            return f.write_char('C');
        }
        for color in self.iter() {
            f.write_char(color.symbol())?;
        }
        Ok(())
    }
}

/// A mana cost string such as `"3RR"` or `"1W/U"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ManaCost<'a>(&'a str);

impl<'a> ManaCost<'a> {
    /// Wraps a cost string.
    pub fn new(cost: &'a str) -> Self {
        Self(cost)
    }

    /// The raw cost string.
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// The colors the cost contains.
    pub fn colors(&self) -> ColorIdentity {
        ColorIdentity::from_cost(self.0)
    }

    /// The converted mana cost.
    ///
    /// Each digit adds its value and each colored, snow (`S`) or colorless (`C`) symbol adds
    /// one. A `/` joins two halves of a hybrid symbol that only count once, so it subtracts
    /// one. The result never goes below zero.
    pub fn converted(&self) -> u32 {
        let total = self.0.chars().fold(0_i64, |total, ch| match ch {
            '0'..='9' => total + i64::from(ch as u8 - b'0'),
            'W' | 'U' | 'B' | 'R' | 'G' | 'S' | 'C' => total + 1,
            '/' => total - 1,
            _ => total,
        });
        u32::try_from(total.max(0)).unwrap_or(u32::MAX)
    }
}
