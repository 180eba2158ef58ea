fn weekday_labels(
  week_start: Weekday
) -> Vec<&'static str> {
  match week_start {
    | Weekday::Mon => {
      vec![
        "Mon", "Tue", "Wed", "Thu",
        "Fri", "Sat", "Sun",
      ]
    }
    | _ => {
      vec![
        "Sun", "Mon", "Tue", "Wed",
        "Thu", "Fri", "Sat",
      ]
    }
  }
}

fn weekend_label(label: &str) -> bool {
  matches!(label, "Sat" | "Sun")
}

fn is_weekend(day: NaiveDate) -> bool {
  matches!(
    day.weekday(),
    Weekday::Sat | Weekday::Sun
  )
}
