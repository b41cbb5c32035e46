// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Yahrzeit and Hebrew-anniversary arithmetic.

use crate::hdate::{self, HDate, HMonth};

/// A death date with the text printed on each observance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Yahrzeit {
    /// Gregorian date of death.
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub description: String,
}

/// A user-supplied annual event on a fixed Hebrew date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEvent {
    pub month: HMonth,
    pub day: u8,
    pub description: String,
}

/// The observance date in `hyear` for a death on `death`, or `None` when
/// `hyear` is not after the year of death.
///
/// Edge rules follow the traditional practice: deaths on the 30th of
/// Cheshvan or Kislev observe on the last day of that month whenever the
/// first anniversary year lacked the 30th; Adar II deaths observe in the
/// final Adar of the target year; 30 Adar I deaths observe on 30 Sh'vat in
/// common years.
#[must_use]
pub fn yahrzeit_date(death: HDate, hyear: i32) -> Option<HDate> {
    if hyear <= death.year() {
        return None;
    }
    let anniversary = match (death.month(), death.day()) {
        (HMonth::Cheshvan, 30) if !hdate::long_cheshvan(death.year() + 1) => {
            HDate::from_abs(HDate::must(hyear, HMonth::Kislev, 1).abs() - 1)
        }
        (HMonth::Kislev, 30) if hdate::short_kislev(death.year() + 1) => {
            HDate::from_abs(HDate::must(hyear, HMonth::Tevet, 1).abs() - 1)
        }
        (HMonth::Adar2, day) => {
            let last_adar = if hdate::is_leap_year(hyear) { HMonth::Adar2 } else { HMonth::Adar1 };
            HDate::must(hyear, last_adar, day)
        }
        (HMonth::Adar1, 30) if !hdate::is_leap_year(hyear) => {
            HDate::must(hyear, HMonth::Shvat, 30)
        }
        (month, day) => at_or_next(hyear, month, day),
    };
    Some(anniversary)
}

/// The given day of the month, sliding a 30th forward into the next month
/// when the target year's month runs short.
fn at_or_next(hyear: i32, month: HMonth, day: u8) -> HDate {
    let len = hdate::days_in_month(month, hyear);
    if day > len {
        HDate::from_abs(HDate::must(hyear, month, len).abs() + 1)
    } else {
        HDate::must(hyear, month, day)
    }
}

/// The date a user event falls on in `hyear`: the Adar II fixup applies in
/// common years, and a 30th in a month that comes up short slides to the 1st
/// of the next month.
#[must_use]
pub fn user_event_date(ev: &UserEvent, hyear: i32) -> HDate {
    let month = if ev.month == HMonth::Adar2 && !hdate::is_leap_year(hyear) {
        HMonth::Adar1
    } else {
        ev.month
    };
    at_or_next(hyear, month, ev.day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_anniversary_keeps_month_and_day() {
        let death = HDate::new(5750, HMonth::Sivan, 12).unwrap();
        let hd = yahrzeit_date(death, 5783).unwrap();
        assert_eq!((hd.month(), hd.day()), (HMonth::Sivan, 12));
    }

    #[test]
    fn no_observance_in_or_before_death_year() {
        let death = HDate::new(5750, HMonth::Sivan, 12).unwrap();
        assert!(yahrzeit_date(death, 5750).is_none());
        assert!(yahrzeit_date(death, 5749).is_none());
    }

    #[test]
    fn cheshvan_30_death_follows_first_anniversary_year() {
        // 5783 has a 30-day Cheshvan; 5784 (the first anniversary year) does not
        let death = HDate::new(5783, HMonth::Cheshvan, 30).unwrap();
        let hd = yahrzeit_date(death, 5784).unwrap();
        assert_eq!((hd.month(), hd.day()), (HMonth::Cheshvan, 29));
        // and stays on 29 Cheshvan even in later years that do have the 30th
        let hd = yahrzeit_date(death, 5788).unwrap();
        assert_eq!(hd.day(), 29);
    }

    #[test]
    fn kislev_30_death_in_a_kind_first_year_keeps_the_30th() {
        // 5782 has a 30-day Kislev and so does 5783
        let death = HDate::new(5782, HMonth::Kislev, 30).unwrap();
        let hd = yahrzeit_date(death, 5783).unwrap();
        assert_eq!((hd.month(), hd.day()), (HMonth::Kislev, 30));
        // in 5784, a chaserah year, the missing 30th slides to 1 Tevet
        let hd = yahrzeit_date(death, 5784).unwrap();
        assert_eq!((hd.month(), hd.day()), (HMonth::Tevet, 1));
    }

    #[test]
    fn adar_ii_death_observes_in_the_last_adar() {
        let death = HDate::new(5782, HMonth::Adar2, 10).unwrap();
        let common = yahrzeit_date(death, 5783).unwrap();
        assert_eq!((common.month(), common.day()), (HMonth::Adar1, 10));
        let leap = yahrzeit_date(death, 5784).unwrap();
        assert_eq!((leap.month(), leap.day()), (HMonth::Adar2, 10));
    }

    #[test]
    fn adar_i_30_death_observes_in_shvat_in_common_years() {
        let death = HDate::new(5782, HMonth::Adar1, 30).unwrap();
        let common = yahrzeit_date(death, 5783).unwrap();
        assert_eq!((common.month(), common.day()), (HMonth::Shvat, 30));
        let leap = yahrzeit_date(death, 5784).unwrap();
        assert_eq!((leap.month(), leap.day()), (HMonth::Adar1, 30));
    }

    #[test]
    fn user_event_collapses_adar_ii() {
        let ev = UserEvent {
            month: HMonth::Adar2,
            day: 14,
            description: "birthday".into(),
        };
        assert_eq!(user_event_date(&ev, 5783).month(), HMonth::Adar1);
        assert_eq!(user_event_date(&ev, 5784).month(), HMonth::Adar2);
    }

    #[test]
    fn user_event_on_a_missing_30th_slides_forward() {
        let ev = UserEvent {
            month: HMonth::Kislev,
            day: 30,
            description: "dedication".into(),
        };
        // 5784 Kislev has 29 days
        let hd = user_event_date(&ev, 5784);
        assert_eq!((hd.month(), hd.day()), (HMonth::Tevet, 1));
    }
}
