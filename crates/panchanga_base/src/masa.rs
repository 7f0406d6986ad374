//! Masa (lunar month, amanta reckoning) and Ritu (season).
//!
//! A month runs new moon to new moon and takes its name from the rashi the
//! sidereal Sun occupies at the closing new moon: Sun in Mesha names Chaitra.
//! When the Sun does not change rashi between the two new moons the month
//! is adhika (intercalary) and borrows the name of the following month.

/// The 12 lunar months, Chaitra first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashwin,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashwin,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

impl Masa {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashwin => "Ashwin",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    /// 0-based index (Chaitra=0 .. Phalguna=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (1..=12).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(number: u8) -> Option<Self> {
        ALL_MASAS.get((number as usize).checked_sub(1)?).copied()
    }

    /// Season this month belongs to.
    pub const fn ritu(self) -> Ritu {
        ALL_RITUS[(self as u8 / 2) as usize]
    }
}

/// Masa named by the Sun's 0-based sidereal rashi index (Mesha = Chaitra).
pub fn masa_from_rashi_index(rashi_index: u8) -> Masa {
    ALL_MASAS[(rashi_index % 12) as usize]
}

/// Classify a lunation from the Sun's rashi at its opening and closing new moons.
///
/// Returns `(masa, is_leap)`.
pub fn masa_from_new_moon_rashis(rashi_at_start: u8, rashi_at_end: u8) -> (Masa, bool) {
    if rashi_at_start != rashi_at_end {
        (masa_from_rashi_index(rashi_at_end), false)
    } else {
        (masa_from_rashi_index((rashi_at_start + 1) % 12), true)
    }
}

/// The six seasons, two months each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Ritu {
    Vasanta,
    Grishma,
    Varsha,
    Sharad,
    Hemanta,
    Shishira,
}

pub const ALL_RITUS: [Ritu; 6] = [
    Ritu::Vasanta,
    Ritu::Grishma,
    Ritu::Varsha,
    Ritu::Sharad,
    Ritu::Hemanta,
    Ritu::Shishira,
];

impl Ritu {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vasanta => "Vasanta",
            Self::Grishma => "Grishma",
            Self::Varsha => "Varsha",
            Self::Sharad => "Sharad",
            Self::Hemanta => "Hemanta",
            Self::Shishira => "Shishira",
        }
    }

    /// 1-based number (1..=6).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(number: u8) -> Option<Self> {
        ALL_RITUS.get((number as usize).checked_sub(1)?).copied()
    }
}

/// Ritu for a 1-based masa number: `(number - 1) / 2`.
pub fn ritu_from_masa_number(masa_number: u8) -> Option<Ritu> {
    Masa::from_number(masa_number).map(Masa::ritu)
}
