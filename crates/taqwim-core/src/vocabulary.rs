//! Month names and relative-time phrases for each language.

use crate::models::{Calendar, Language};

const GREGORIAN_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const GREGORIAN_AR: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

const HIJRI_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabiʻ I",
    "Rabiʻ II",
    "Jumada I",
    "Jumada II",
    "Rajab",
    "Shaʻban",
    "Ramadan",
    "Shawwal",
    "Dhuʻl-Qiʻdah",
    "Dhuʻl-Hijjah",
];

const HIJRI_AR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

/// Name of `month` (1-based) in the given calendar and language.
///
/// Out-of-range months clamp to the nearest valid one.
pub fn month_name(calendar: Calendar, language: Language, month: u8) -> &'static str {
    let index = usize::from(month.clamp(1, 12)) - 1;
    let table = match (calendar, language) {
        (Calendar::Gregorian, Language::English) => &GREGORIAN_EN,
        (Calendar::Gregorian, Language::Arabic) => &GREGORIAN_AR,
        (Calendar::Islamic, Language::English) => &HIJRI_EN,
        (Calendar::Islamic, Language::Arabic) => &HIJRI_AR,
    };
    table[index]
}

/// Era suffix appended to Hijri years.
pub fn hijri_era(language: Language) -> &'static str {
    match language {
        Language::English => "AH",
        Language::Arabic => "هـ",
    }
}

/// Separator between the date and the time of day.
pub fn time_separator(language: Language) -> &'static str {
    match language {
        Language::English => ", ",
        Language::Arabic => "، ",
    }
}

/// Units of the relative-time buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeUnit {
    Minute,
    Hour,
    Day,
    Week,
}

impl RelativeUnit {
    fn english(&self) -> &'static str {
        match self {
            RelativeUnit::Minute => "minute",
            RelativeUnit::Hour => "hour",
            RelativeUnit::Day => "day",
            RelativeUnit::Week => "week",
        }
    }

    fn arabic(&self) -> &'static str {
        match self {
            RelativeUnit::Minute => "دقيقة",
            RelativeUnit::Hour => "ساعة",
            RelativeUnit::Day => "يوم",
            RelativeUnit::Week => "أسبوع",
        }
    }
}

pub fn just_now(language: Language) -> &'static str {
    match language {
        Language::English => "Just now",
        Language::Arabic => "الآن",
    }
}

/// "{n} unit(s) ago" in English, "منذ {n} unit" in Arabic.
///
/// Arabic keeps a single invariant form regardless of `count`.
pub fn ago(language: Language, count: i64, unit: RelativeUnit) -> String {
    match language {
        Language::English => {
            let plural = if count > 1 { "s" } else { "" };
            format!("{count} {}{plural} ago", unit.english())
        }
        Language::Arabic => format!("منذ {count} {}", unit.arabic()),
    }
}
