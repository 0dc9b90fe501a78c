/// A calendar date and time, broken into the fields that BCD timestamps carry.
///
/// This is deliberately plain: it does not know about time zones or leap seconds. It only checks
/// that each field lies in its calendar range, so that every field encodes to a valid BCD byte
/// (apart from the year and millisecond fields, which are truncated to their low two digits).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct BcdDateTime {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
}

impl BcdDateTime {
    /// Constructor. Returns `None` if any field is out of range.
    ///
    /// `day` is checked against the length of `month` in `year`.
    pub fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Option<Self> {
        if !(1..=12).contains(&month)
            || day == 0
            || day > days_in_month(year, month)
            || hour > 23
            || minute > 59
            || second > 59
        {
            return None;
        }

        Some(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond: 0,
        })
    }

    /// Returns a copy with the millisecond field set. Returns `None` if `millisecond > 999`.
    pub fn with_millis(self, millisecond: u16) -> Option<Self> {
        if millisecond > 999 {
            return None;
        }
        Some(Self {
            millisecond,
            ..self
        })
    }

    /// The full year, e.g. `2024`.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Month of the year, `1..=12`.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month, starting at 1.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Hour of the day, `0..=23`.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of the hour, `0..=59`.
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Second of the minute, `0..=59`.
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Millisecond of the second, `0..=999`.
    pub fn millisecond(&self) -> u16 {
        self.millisecond
    }

    /// The fields in record order: year mod 100, month, day, hour, minute, second, millisecond.
    pub fn fields(&self) -> [u32; 7] {
        [
            u32::from(self.year % 100),
            u32::from(self.month),
            u32::from(self.day),
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
            u32::from(self.millisecond),
        ]
    }
}

#[cfg(feature = "chrono")]
impl BcdDateTime {
    /// Converts a `chrono` date and time, keeping millisecond precision.
    ///
    /// Returns `None` if the year lies outside `0..=65535`. A leap second, which `chrono` stores
    /// as 1000 ms or more past second 59, keeps only its millisecond within that second.
    pub fn from_chrono(dt: &chrono::NaiveDateTime) -> Option<Self> {
        use chrono::{Datelike, Timelike};

        let year = u16::try_from(dt.year()).ok()?;
        let millis = (dt.nanosecond() / 1_000_000 % 1000) as u16;
        Self::new(
            year,
            dt.month() as u8,
            dt.day() as u8,
            dt.hour() as u8,
            dt.minute() as u8,
            dt.second() as u8,
        )?
        .with_millis(millis)
    }
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(BcdDateTime::new(2024, 0, 1, 0, 0, 0).is_none());
        assert!(BcdDateTime::new(2024, 13, 1, 0, 0, 0).is_none());
        assert!(BcdDateTime::new(2024, 4, 31, 0, 0, 0).is_none());
        assert!(BcdDateTime::new(2024, 1, 1, 24, 0, 0).is_none());
        assert!(BcdDateTime::new(2024, 1, 1, 0, 60, 0).is_none());
        assert!(BcdDateTime::new(2024, 1, 1, 0, 0, 60).is_none());
        assert!(BcdDateTime::new(2024, 1, 1, 0, 0, 0)
            .unwrap()
            .with_millis(1000)
            .is_none());
    }

    #[test]
    fn leap_days() {
        assert!(BcdDateTime::new(2024, 2, 29, 0, 0, 0).is_some());
        assert!(BcdDateTime::new(2023, 2, 29, 0, 0, 0).is_none());
        assert!(BcdDateTime::new(1900, 2, 29, 0, 0, 0).is_none());
        assert!(BcdDateTime::new(2000, 2, 29, 0, 0, 0).is_some());
    }

    #[test]
    fn fields_in_record_order() {
        let dt = BcdDateTime::new(2024, 3, 5, 8, 9, 10)
            .unwrap()
            .with_millis(456)
            .unwrap();
        assert_eq!(dt.fields(), [24, 3, 5, 8, 9, 10, 456]);
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn from_chrono() {
        use chrono::NaiveDate;

        let dt = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_milli_opt(8, 9, 10, 456)
            .unwrap();
        let bcd = BcdDateTime::from_chrono(&dt).unwrap();
        assert_eq!(bcd.fields(), [24, 3, 5, 8, 9, 10, 456]);

        let leap = NaiveDate::from_ymd_opt(2016, 12, 31)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 1_250)
            .unwrap();
        assert_eq!(BcdDateTime::from_chrono(&leap).unwrap().millisecond(), 250);

        let bc = NaiveDate::from_ymd_opt(-1, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(BcdDateTime::from_chrono(&bc).is_none());
    }
}
