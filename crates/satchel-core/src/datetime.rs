use chrono::{
  Datelike,
  Duration,
  NaiveDate,
  NaiveTime,
  Utc,
  Weekday
};
use chrono_tz::Tz;
use regex::Regex;

/// Accepts `9:00`, `09:30`, `2:30pm`
/// and `2:30 PM`. Hours with a
/// meridiem must sit in 1..=12; bare
/// hours may run 0..=23.
pub fn parse_clock_time(
  raw: &str
) -> Option<NaiveTime> {
  let pattern = Regex::new(
    r"(?i)^(?P<hour>\d{1,2}):(?P<minute>\d{2})\s*(?P<ampm>[ap]m)?$",
  )
  .ok()?;
  let caps =
    pattern.captures(raw.trim())?;

  let raw_hour: u32 = caps
    .name("hour")?
    .as_str()
    .parse()
    .ok()?;
  let minute: u32 = caps
    .name("minute")?
    .as_str()
    .parse()
    .ok()?;
  if minute > 59 {
    return None;
  }

  let hour = match caps
    .name("ampm")
    .map(|m| m.as_str().to_lowercase())
  {
    | Some(meridiem) => {
      if raw_hour == 0 || raw_hour > 12
      {
        return None;
      }
      let base = raw_hour % 12;
      if meridiem == "pm" {
        base + 12
      } else {
        base
      }
    }
    | None => {
      if raw_hour > 23 {
        return None;
      }
      raw_hour
    }
  };

  NaiveTime::from_hms_opt(
    hour, minute, 0
  )
}

pub fn format_clock_time(
  time: NaiveTime,
  use_24h: bool
) -> String {
  let pattern = if use_24h {
    "%H:%M"
  } else {
    "%-I:%M %p"
  };
  time.format(pattern).to_string()
}

/// Gutter label for one grid row.
pub fn hour_label(
  hour: u32,
  use_24h: bool
) -> String {
  if use_24h {
    return format!("{hour:02}:00");
  }
  let meridiem =
    if hour < 12 { "AM" } else { "PM" };
  let display = match hour % 12 {
    | 0 => 12,
    | other => other
  };
  format!("{display} {meridiem}")
}

pub fn parse_week_start(
  raw: &str
) -> Option<Weekday> {
  match raw
    .trim()
    .to_lowercase()
    .as_str()
  {
    | "monday" => Some(Weekday::Mon),
    | "sunday" => Some(Weekday::Sun),
    | _ => None
  }
}

pub fn start_of_week(
  date: NaiveDate,
  week_start: Weekday
) -> NaiveDate {
  let offset = (7
    + date
      .weekday()
      .num_days_from_monday()
      as i64
    - week_start.num_days_from_monday()
      as i64)
    % 7;
  add_days(date, -offset)
}

pub fn end_of_week(
  date: NaiveDate,
  week_start: Weekday
) -> NaiveDate {
  add_days(
    start_of_week(date, week_start),
    6
  )
}

pub fn first_day_of_month(
  date: NaiveDate
) -> NaiveDate {
  date.with_day(1).unwrap_or(date)
}

pub fn last_day_of_month(
  date: NaiveDate
) -> NaiveDate {
  let day = days_in_month(
    date.year(),
    date.month()
  );
  date.with_day(day).unwrap_or(date)
}

pub fn days_in_month(
  year: i32,
  month: u32
) -> u32 {
  let (next_year, next_month) =
    if month == 12 {
      (year + 1, 1)
    } else {
      (year, month + 1)
    };
  NaiveDate::from_ymd_opt(
    next_year, next_month, 1
  )
  .and_then(|first| first.pred_opt())
  .map(|last| last.day())
  .unwrap_or(30)
}

pub fn add_days(
  date: NaiveDate,
  days: i64
) -> NaiveDate {
  date
    .checked_add_signed(
      Duration::days(days)
    )
    .unwrap_or(date)
}

/// Month arithmetic with the day
/// clamped to the target month, so
/// Jan 31 + 1 lands on the last day
/// of February.
pub fn shift_months(
  date: NaiveDate,
  delta: i32
) -> NaiveDate {
  let months = date.year() * 12
    + date.month0() as i32
    + delta;
  let year = months.div_euclid(12);
  let month =
    months.rem_euclid(12) as u32 + 1;
  let day = date
    .day()
    .min(days_in_month(year, month));
  NaiveDate::from_ymd_opt(
    year, month, day
  )
  .unwrap_or(date)
}

pub fn resolve_timezone(
  raw: &str
) -> Tz {
  match raw.trim().parse::<Tz>() {
    | Ok(tz) => tz,
    | Err(_) => {
      tracing::warn!(
        timezone = raw,
        "unknown timezone; falling \
         back to UTC"
      );
      Tz::UTC
    }
  }
}

pub fn today_in_timezone(
  tz: Tz
) -> NaiveDate {
  Utc::now()
    .with_timezone(&tz)
    .date_naive()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(
    year: i32,
    month: u32,
    day: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(
      year, month, day
    )
    .expect("valid date")
  }

  fn time(
    hour: u32,
    minute: u32
  ) -> NaiveTime {
    NaiveTime::from_hms_opt(
      hour, minute, 0
    )
    .expect("valid time")
  }

  #[test]
  fn parses_bare_clock_times() {
    assert_eq!(
      parse_clock_time("9:00"),
      Some(time(9, 0))
    );
    assert_eq!(
      parse_clock_time("09:30"),
      Some(time(9, 30))
    );
    assert_eq!(
      parse_clock_time("23:59"),
      Some(time(23, 59))
    );
    assert_eq!(
      parse_clock_time(" 7:05 "),
      Some(time(7, 5))
    );
  }

  #[test]
  fn parses_meridiem_clock_times() {
    assert_eq!(
      parse_clock_time("2:30pm"),
      Some(time(14, 30))
    );
    assert_eq!(
      parse_clock_time("2:30 PM"),
      Some(time(14, 30))
    );
    assert_eq!(
      parse_clock_time("12:00am"),
      Some(time(0, 0))
    );
    assert_eq!(
      parse_clock_time("12:00pm"),
      Some(time(12, 0))
    );
  }

  #[test]
  fn rejects_malformed_clock_times() {
    for raw in [
      "24:00", "9:60", "0:30am",
      "13:00pm", "900", "soonish", ""
    ] {
      assert_eq!(
        parse_clock_time(raw),
        None,
        "{raw} should not parse"
      );
    }
  }

  #[test]
  fn formats_clock_times() {
    assert_eq!(
      format_clock_time(
        time(9, 0),
        false
      ),
      "9:00 AM"
    );
    assert_eq!(
      format_clock_time(
        time(14, 30),
        false
      ),
      "2:30 PM"
    );
    assert_eq!(
      format_clock_time(
        time(0, 5),
        false
      ),
      "12:05 AM"
    );
    assert_eq!(
      format_clock_time(
        time(14, 30),
        true
      ),
      "14:30"
    );
    assert_eq!(
      format_clock_time(
        time(9, 0),
        true
      ),
      "09:00"
    );
  }

  #[test]
  fn labels_grid_hours() {
    assert_eq!(
      hour_label(9, false),
      "9 AM"
    );
    assert_eq!(
      hour_label(0, false),
      "12 AM"
    );
    assert_eq!(
      hour_label(12, false),
      "12 PM"
    );
    assert_eq!(
      hour_label(9, true),
      "09:00"
    );
    assert_eq!(
      hour_label(15, true),
      "15:00"
    );
  }

  #[test]
  fn week_bounds_follow_week_start() {
    let friday = date(2024, 3, 15);
    assert_eq!(
      start_of_week(
        friday,
        Weekday::Sun
      ),
      date(2024, 3, 10)
    );
    assert_eq!(
      end_of_week(friday, Weekday::Sun),
      date(2024, 3, 16)
    );
    assert_eq!(
      start_of_week(
        friday,
        Weekday::Mon
      ),
      date(2024, 3, 11)
    );
    assert_eq!(
      start_of_week(
        date(2024, 3, 10),
        Weekday::Sun
      ),
      date(2024, 3, 10)
    );
  }

  #[test]
  fn month_bounds_handle_leap_years() {
    let mid = date(2024, 2, 10);
    assert_eq!(
      first_day_of_month(mid),
      date(2024, 2, 1)
    );
    assert_eq!(
      last_day_of_month(mid),
      date(2024, 2, 29)
    );
    assert_eq!(
      last_day_of_month(date(
        2023, 2, 10
      )),
      date(2023, 2, 28)
    );
  }

  #[test]
  fn adds_days_across_months() {
    assert_eq!(
      add_days(date(2024, 3, 31), 1),
      date(2024, 4, 1)
    );
    assert_eq!(
      add_days(date(2024, 3, 1), -1),
      date(2024, 2, 29)
    );
  }

  #[test]
  fn shifts_months_with_day_clamp() {
    let jan31 = date(2024, 1, 31);
    let feb29 =
      shift_months(jan31, 1);
    assert_eq!(
      feb29,
      date(2024, 2, 29)
    );
    assert_eq!(
      shift_months(feb29, 1),
      date(2024, 3, 29)
    );
    assert_eq!(
      shift_months(
        date(2024, 3, 31),
        -1
      ),
      date(2024, 2, 29)
    );
    assert_eq!(
      shift_months(
        date(2024, 12, 15),
        1
      ),
      date(2025, 1, 15)
    );
  }

  #[test]
  fn parses_week_start_names() {
    assert_eq!(
      parse_week_start("monday"),
      Some(Weekday::Mon)
    );
    assert_eq!(
      parse_week_start("Sunday"),
      Some(Weekday::Sun)
    );
    assert_eq!(
      parse_week_start("tuesday"),
      None
    );
  }

  #[test]
  fn resolves_timezones_with_fallback()
  {
    assert_eq!(
      resolve_timezone(
        "America/New_York"
      ),
      chrono_tz::America::New_York
    );
    assert_eq!(
      resolve_timezone("Mars/Olympus"),
      Tz::UTC
    );
  }
}
