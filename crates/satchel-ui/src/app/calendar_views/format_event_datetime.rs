/// "Mar 16 at 9:00 AM" for the
/// deadline sidebar.
fn format_event_datetime(
  start: NaiveDateTime,
  use_24h: bool
) -> String {
  format!(
    "{} at {}",
    start.format("%b %-d"),
    format_clock_time(
      start.time(),
      use_24h
    )
  )
}
