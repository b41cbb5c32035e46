// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Translation lookup for event basenames, month names and fixed phrases.
//!
//! The tables are static data; anything missing falls back to the English
//! key, so renderers never fail on an unknown string.

use crate::error::CalError;

/// Output language for [`crate::Event::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    /// Ashkenazi transliterations (Sukkos, Shavuos, …).
    Ashkenazi,
    /// Hebrew with nikud where customary.
    He,
    /// Sephardic-style transliterations; currently the English table.
    Translit,
}

impl Locale {
    pub const ALL_NAMES: &'static [&'static str] = &["en", "he", "ashkenazi", "translit"];

    pub fn parse(name: &str) -> Result<Locale, CalError> {
        match name.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "he" => Ok(Locale::He),
            "ashkenazi" => Ok(Locale::Ashkenazi),
            "translit" => Ok(Locale::Translit),
            _ => Err(CalError::UnknownLocale(name.to_string())),
        }
    }
}

struct Entry {
    key: &'static str,
    he: &'static str,
    ashkenazi: &'static str,
}

macro_rules! entry {
    ($key:literal, $he:literal) => {
        Entry { key: $key, he: $he, ashkenazi: "" }
    };
    ($key:literal, $he:literal, $ash:literal) => {
        Entry { key: $key, he: $he, ashkenazi: $ash }
    };
}

#[rustfmt::skip]
static TABLE: &[Entry] = &[
    // months
    entry!("Nisan", "ניסן"),
    entry!("Iyyar", "אייר"),
    entry!("Sivan", "סיון"),
    entry!("Tamuz", "תמוז"),
    entry!("Av", "אב"),
    entry!("Elul", "אלול"),
    entry!("Tishrei", "תשרי"),
    entry!("Cheshvan", "חשון"),
    entry!("Kislev", "כסלו"),
    entry!("Tevet", "טבת", "Teves"),
    entry!("Sh'vat", "שבט"),
    entry!("Adar", "אדר"),
    entry!("Adar I", "אדר א׳"),
    entry!("Adar II", "אדר ב׳"),
    // holidays
    entry!("Rosh Hashana", "ראש השנה"),
    entry!("Rosh Hashana II", "ראש השנה ב׳"),
    entry!("Erev Rosh Hashana", "ערב ראש השנה"),
    entry!("Tzom Gedaliah", "צום גדליה"),
    entry!("Shabbat Shuva", "שבת שובה", "Shabbos Shuva"),
    entry!("Erev Yom Kippur", "ערב יום כפור"),
    entry!("Yom Kippur", "יום כפור"),
    entry!("Yom Kippur Katan", "יום כפור קטן"),
    entry!("Erev Sukkot", "ערב סוכות", "Erev Sukkos"),
    entry!("Sukkot I", "סוכות א׳", "Sukkos I"),
    entry!("Sukkot II", "סוכות ב׳", "Sukkos II"),
    entry!("Sukkot II (CH''M)", "סוכות ב׳ (חוה״מ)", "Sukkos II (CH''M)"),
    entry!("Sukkot III (CH''M)", "סוכות ג׳ (חוה״מ)", "Sukkos III (CH''M)"),
    entry!("Sukkot IV (CH''M)", "סוכות ד׳ (חוה״מ)", "Sukkos IV (CH''M)"),
    entry!("Sukkot V (CH''M)", "סוכות ה׳ (חוה״מ)", "Sukkos V (CH''M)"),
    entry!("Sukkot VI (CH''M)", "סוכות ו׳ (חוה״מ)", "Sukkos VI (CH''M)"),
    entry!("Sukkot VII (Hoshana Raba)", "סוכות ז׳ (הושענא רבה)", "Sukkos VII (Hoshana Raba)"),
    entry!("Shmini Atzeret", "שמיני עצרת", "Shmini Atzeres"),
    entry!("Simchat Torah", "שמחת תורה", "Simchas Torah"),
    entry!("Chanukah", "חנוכה"),
    entry!("Chanukah: 8th Day", "חנוכה: יום ח׳"),
    entry!("Asara B'Tevet", "עשרה בטבת", "Asara B'Teves"),
    entry!("Tu BiShvat", "ט״ו בשבט"),
    entry!("Ta'anit Esther", "תענית אסתר", "Ta'anis Esther"),
    entry!("Purim", "פורים"),
    entry!("Shushan Purim", "שושן פורים"),
    entry!("Shabbat Shekalim", "שבת שקלים", "Shabbos Shekalim"),
    entry!("Shabbat Zachor", "שבת זכור", "Shabbos Zachor"),
    entry!("Shabbat Parah", "שבת פרה", "Shabbos Parah"),
    entry!("Shabbat HaChodesh", "שבת החודש", "Shabbos HaChodesh"),
    entry!("Shabbat HaGadol", "שבת הגדול", "Shabbos HaGadol"),
    entry!("Shabbat Nachamu", "שבת נחמו", "Shabbos Nachamu"),
    entry!("Ta'anit Bechorot", "תענית בכורות", "Ta'anis Bechoros"),
    entry!("Erev Pesach", "ערב פסח"),
    entry!("Pesach I", "פסח א׳"),
    entry!("Pesach II", "פסח ב׳"),
    entry!("Pesach II (CH''M)", "פסח ב׳ (חוה״מ)"),
    entry!("Pesach III (CH''M)", "פסח ג׳ (חוה״מ)"),
    entry!("Pesach IV (CH''M)", "פסח ד׳ (חוה״מ)"),
    entry!("Pesach V (CH''M)", "פסח ה׳ (חוה״מ)"),
    entry!("Pesach VI (CH''M)", "פסח ו׳ (חוה״מ)"),
    entry!("Pesach VII", "פסח ז׳"),
    entry!("Pesach VIII", "פסח ח׳"),
    entry!("Pesach Sheni", "פסח שני"),
    entry!("Lag BaOmer", "ל״ג בעומר"),
    entry!("Erev Shavuot", "ערב שבועות", "Erev Shavuos"),
    entry!("Shavuot", "שבועות", "Shavuos"),
    entry!("Shavuot I", "שבועות א׳", "Shavuos I"),
    entry!("Shavuot II", "שבועות ב׳", "Shavuos II"),
    entry!("Tzom Tammuz", "צום תמוז"),
    entry!("Tish'a B'Av", "תשעה באב"),
    entry!("Tu B'Av", "ט״ו באב"),
    entry!("Yom HaShoah", "יום השואה"),
    entry!("Yom HaZikaron", "יום הזכרון"),
    entry!("Yom HaAtzma'ut", "יום העצמאות"),
    entry!("Yom Yerushalayim", "יום ירושלים"),
    // fixed phrases
    entry!("Rosh Chodesh", "ראש חודש"),
    entry!("Shabbat Mevarchim Chodesh", "שבת מברכים חודש", "Shabbos Mevorchim Chodesh"),
    entry!("Candle lighting", "הדלקת נרות"),
    entry!("Havdalah", "הבדלה"),
    entry!("Parashat", "פרשת", "Parshas"),
    entry!("day of the Omer", "בעומר"),
    entry!("Molad", "מולד"),
    entry!("Daf Yomi", "דף יומי"),
    // parshiot
    entry!("Bereshit", "בראשית", "Bereshis"),
    entry!("Noach", "נח"),
    entry!("Lech-Lecha", "לך־לך"),
    entry!("Vayera", "וירא"),
    entry!("Chayei Sara", "חיי שרה"),
    entry!("Toldot", "תולדות", "Toldos"),
    entry!("Vayetzei", "ויצא"),
    entry!("Vayishlach", "וישלח"),
    entry!("Vayeshev", "וישב"),
    entry!("Miketz", "מקץ"),
    entry!("Vayigash", "ויגש"),
    entry!("Vayechi", "ויחי"),
    entry!("Shemot", "שמות", "Shemos"),
    entry!("Vaera", "וארא"),
    entry!("Bo", "בא"),
    entry!("Beshalach", "בשלח"),
    entry!("Yitro", "יתרו", "Yisro"),
    entry!("Mishpatim", "משפטים"),
    entry!("Terumah", "תרומה"),
    entry!("Tetzaveh", "תצוה"),
    entry!("Ki Tisa", "כי תשא", "Ki Sisa"),
    entry!("Vayakhel", "ויקהל"),
    entry!("Pekudei", "פקודי"),
    entry!("Vayikra", "ויקרא"),
    entry!("Tzav", "צו"),
    entry!("Shmini", "שמיני"),
    entry!("Tazria", "תזריע"),
    entry!("Metzora", "מצורע"),
    entry!("Achrei Mot", "אחרי מות", "Achrei Mos"),
    entry!("Kedoshim", "קדושים"),
    entry!("Emor", "אמור"),
    entry!("Behar", "בהר"),
    entry!("Bechukotai", "בחוקותי", "Bechukosai"),
    entry!("Bamidbar", "במדבר"),
    entry!("Nasso", "נשא"),
    entry!("Beha'alotcha", "בהעלותך", "Beha'aloscha"),
    entry!("Sh'lach", "שלח־לך"),
    entry!("Korach", "קורח"),
    entry!("Chukat", "חוקת", "Chukas"),
    entry!("Balak", "בלק"),
    entry!("Pinchas", "פינחס"),
    entry!("Matot", "מטות", "Matos"),
    entry!("Masei", "מסעי"),
    entry!("Devarim", "דברים"),
    entry!("Vaetchanan", "ואתחנן"),
    entry!("Eikev", "עקב"),
    entry!("Re'eh", "ראה"),
    entry!("Shoftim", "שופטים"),
    entry!("Ki Teitzei", "כי תצא", "Ki Seitzei"),
    entry!("Ki Tavo", "כי תבוא", "Ki Savo"),
    entry!("Nitzavim", "נצבים"),
    entry!("Vayelech", "וילך"),
    entry!("Ha'Azinu", "האזינו"),
    entry!("Vezot Haberakhah", "וזאת הברכה", "Vezos Haberachah"),
];

/// Localized form of `key`; falls back to `key` itself.
#[must_use]
pub fn lookup(key: &str, locale: Locale) -> &str {
    let entry = match locale {
        Locale::En | Locale::Translit => return key,
        _ => TABLE.iter().find(|e| e.key == key),
    };
    match (entry, locale) {
        (Some(e), Locale::He) if !e.he.is_empty() => e.he,
        (Some(e), Locale::Ashkenazi) if !e.ashkenazi.is_empty() => e.ashkenazi,
        _ => key,
    }
}

/// Localized form of `key`, or `None` when the table has nothing for it.
#[must_use]
pub fn lookup_opt(key: &str, locale: Locale) -> Option<&str> {
    let e = TABLE.iter().find(|e| e.key == key)?;
    match locale {
        Locale::He if !e.he.is_empty() => Some(e.he),
        Locale::Ashkenazi if !e.ashkenazi.is_empty() => Some(e.ashkenazi),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_english() {
        assert_eq!(lookup("Rosh Hashana", Locale::En), "Rosh Hashana");
        assert_eq!(lookup("Purim", Locale::Ashkenazi), "Purim");
        assert_eq!(lookup("No Such Key", Locale::He), "No Such Key");
    }

    #[test]
    fn translates_hebrew() {
        assert_eq!(lookup("Yom Kippur", Locale::He), "יום כפור");
        assert_eq!(lookup("Candle lighting", Locale::He), "הדלקת נרות");
        assert_eq!(lookup("Bereshit", Locale::He), "בראשית");
    }

    #[test]
    fn translates_ashkenazi() {
        assert_eq!(lookup("Sukkot I", Locale::Ashkenazi), "Sukkos I");
        assert_eq!(lookup("Shavuot", Locale::Ashkenazi), "Shavuos");
        assert_eq!(lookup("Matot", Locale::Ashkenazi), "Matos");
    }

    #[test]
    fn parses_locale_names() {
        assert_eq!(Locale::parse("he").unwrap(), Locale::He);
        assert_eq!(Locale::parse("ASHKENAZI").unwrap(), Locale::Ashkenazi);
        assert!(Locale::parse("klingon").is_err());
    }
}
