//! Samvatsara: position in the 60-year Jovian cycle.
//!
//! The cycle runs continuously from the epoch CE 1987 = Prabhava (number 1).
//! A samvatsara begins with Chaitra, so the January-March months that still
//! belong to the previous lunar year count against the previous civil year.

use crate::masa::Masa;

/// The 60 samvatsaras (years) of the Vedic cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Samvatsara {
    Prabhava,
    Vibhava,
    Shukla,
    Pramodoota,
    Prajothpatti,
    Angirasa,
    Shrimukha,
    Bhava,
    Yuva,
    Dhaatu,
    Eeshvara,
    Bahudhanya,
    Pramaathi,
    Vikrama,
    Vrisha,
    Chitrabhanu,
    Svabhanu,
    Taarana,
    Paarthiva,
    Vyaya,
    Sarvajit,
    Sarvadhari,
    Virodhi,
    Vikruti,
    Khara,
    Nandana,
    Vijaya,
    Jaya,
    Manmatha,
    Durmukhi,
    Hevilambi,
    Vilambi,
    Vikari,
    Sharvari,
    Plava,
    Shubhakrut,
    Shobhakrut,
    Krodhi,
    Vishvavasu,
    Paraabhava,
    Plavanga,
    Keelaka,
    Saumya,
    Sadharana,
    Virodhikrut,
    Paridhavi,
    Pramaadhi,
    Aananda,
    Raakshasa,
    Naala,
    Pingala,
    Kaalayukti,
    Siddharthi,
    Raudri,
    Durmathi,
    Dundubhi,
    Rudhirodgaari,
    Raktaakshi,
    Krodhana,
    Akshaya,
}

/// All 60 samvatsaras in order (index 0 = Prabhava).
pub const ALL_SAMVATSARAS: [Samvatsara; 60] = [
    Samvatsara::Prabhava,
    Samvatsara::Vibhava,
    Samvatsara::Shukla,
    Samvatsara::Pramodoota,
    Samvatsara::Prajothpatti,
    Samvatsara::Angirasa,
    Samvatsara::Shrimukha,
    Samvatsara::Bhava,
    Samvatsara::Yuva,
    Samvatsara::Dhaatu,
    Samvatsara::Eeshvara,
    Samvatsara::Bahudhanya,
    Samvatsara::Pramaathi,
    Samvatsara::Vikrama,
    Samvatsara::Vrisha,
    Samvatsara::Chitrabhanu,
    Samvatsara::Svabhanu,
    Samvatsara::Taarana,
    Samvatsara::Paarthiva,
    Samvatsara::Vyaya,
    Samvatsara::Sarvajit,
    Samvatsara::Sarvadhari,
    Samvatsara::Virodhi,
    Samvatsara::Vikruti,
    Samvatsara::Khara,
    Samvatsara::Nandana,
    Samvatsara::Vijaya,
    Samvatsara::Jaya,
    Samvatsara::Manmatha,
    Samvatsara::Durmukhi,
    Samvatsara::Hevilambi,
    Samvatsara::Vilambi,
    Samvatsara::Vikari,
    Samvatsara::Sharvari,
    Samvatsara::Plava,
    Samvatsara::Shubhakrut,
    Samvatsara::Shobhakrut,
    Samvatsara::Krodhi,
    Samvatsara::Vishvavasu,
    Samvatsara::Paraabhava,
    Samvatsara::Plavanga,
    Samvatsara::Keelaka,
    Samvatsara::Saumya,
    Samvatsara::Sadharana,
    Samvatsara::Virodhikrut,
    Samvatsara::Paridhavi,
    Samvatsara::Pramaadhi,
    Samvatsara::Aananda,
    Samvatsara::Raakshasa,
    Samvatsara::Naala,
    Samvatsara::Pingala,
    Samvatsara::Kaalayukti,
    Samvatsara::Siddharthi,
    Samvatsara::Raudri,
    Samvatsara::Durmathi,
    Samvatsara::Dundubhi,
    Samvatsara::Rudhirodgaari,
    Samvatsara::Raktaakshi,
    Samvatsara::Krodhana,
    Samvatsara::Akshaya,
];

impl Samvatsara {
    /// Sanskrit name of the samvatsara.
    pub fn name(self) -> &'static str {
        ALL_SAMVATSARA_NAMES[self as usize]
    }

    /// 1-based position in the cycle (Prabhava = 1 .. Akshaya = 60).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(number: u8) -> Option<Self> {
        ALL_SAMVATSARAS.get((number as usize).checked_sub(1)?).copied()
    }
}

const ALL_SAMVATSARA_NAMES: [&str; 60] = [
    "Prabhava",
    "Vibhava",
    "Shukla",
    "Pramodoota",
    "Prajothpatti",
    "Angirasa",
    "Shrimukha",
    "Bhava",
    "Yuva",
    "Dhaatu",
    "Eeshvara",
    "Bahudhanya",
    "Pramaathi",
    "Vikrama",
    "Vrisha",
    "Chitrabhanu",
    "Svabhanu",
    "Taarana",
    "Paarthiva",
    "Vyaya",
    "Sarvajit",
    "Sarvadhari",
    "Virodhi",
    "Vikruti",
    "Khara",
    "Nandana",
    "Vijaya",
    "Jaya",
    "Manmatha",
    "Durmukhi",
    "Hevilambi",
    "Vilambi",
    "Vikari",
    "Sharvari",
    "Plava",
    "Shubhakrut",
    "Shobhakrut",
    "Krodhi",
    "Vishvavasu",
    "Paraabhava",
    "Plavanga",
    "Keelaka",
    "Saumya",
    "Sadharana",
    "Virodhikrut",
    "Paridhavi",
    "Pramaadhi",
    "Aananda",
    "Raakshasa",
    "Naala",
    "Pingala",
    "Kaalayukti",
    "Siddharthi",
    "Raudri",
    "Durmathi",
    "Dundubhi",
    "Rudhirodgaari",
    "Raktaakshi",
    "Krodhana",
    "Akshaya",
];

/// Reference epoch: CE 1987 = Prabhava.
pub const SAMVATSARA_EPOCH_YEAR: i32 = 1987;

/// Samvatsara whose lunar year begins in `ce_year`.
pub fn samvatsara_from_year(ce_year: i32) -> Samvatsara {
    ALL_SAMVATSARAS[(ce_year - SAMVATSARA_EPOCH_YEAR).rem_euclid(60) as usize]
}

/// Lunar-year start for a civil date that falls in `masa`.
///
/// Margashirsha through Phalguna seen in the first half of the civil year
/// belong to the year that began the previous spring.
pub fn lunar_year_for(civil_year: i32, civil_month: u32, masa: Masa) -> i32 {
    if civil_month <= 6 && masa.index() >= Masa::Margashirsha.index() {
        civil_year - 1
    } else {
        civil_year
    }
}
