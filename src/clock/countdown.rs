use super::TICK;
use std::future::Future;

pub const DEFAULT_MINUTES_INPUT: &str = "10";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    seconds_remaining: u64,
    running: bool,
}

impl Countdown {
    pub fn seconds_remaining(&self) -> u64 {
        self.seconds_remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stopped at zero: the minutes input is shown instead of the readout.
    pub fn is_editing(&self) -> bool {
        self.seconds_remaining == 0 && !self.running
    }

    /// Play/pause. Starting from zero seeds the countdown from `minutes_input`.
    pub fn toggle(&mut self, minutes_input: &str) {
        if self.running {
            self.running = false;
            return;
        }
        if self.seconds_remaining == 0 {
            self.seconds_remaining = parse_minutes(minutes_input).saturating_mul(60);
        }
        self.running = self.seconds_remaining > 0;
    }

    /// One second elapsed. Returns true if the remaining time changed.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        if self.seconds_remaining > 0 {
            self.seconds_remaining -= 1;
        }
        if self.seconds_remaining == 0 {
            self.running = false;
        }
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn display(&self) -> String {
        format_mm_ss(self.seconds_remaining)
    }
}

/// Calls `tick` once per [`TICK`], counted from this call, until it returns
/// false. Start it on start/resume and drop it on pause or reset.
pub fn countdown_ticker(mut tick: impl FnMut() -> bool) -> impl Future<Output = ()> {
    let first = tokio::time::Instant::now() + TICK;
    async move {
        let mut interval = tokio::time::interval_at(first, TICK);
        loop {
            interval.tick().await;
            if !tick() {
                break;
            }
        }
    }
}

/// Leading-digit parse of the minutes field; anything else counts as zero.
/// Values past `u64::MAX` saturate.
pub fn parse_minutes(input: &str) -> u64 {
    let trimmed = input.trim();
    trimmed
        .strip_prefix('+')
        .unwrap_or(trimmed)
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |minutes, digit| {
            minutes
                .saturating_mul(10)
                .saturating_add(u64::from(digit - b'0'))
        })
}

pub fn format_mm_ss(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_seeds_sixty_seconds_per_minute() {
        for minutes in [0u64, 1, 10, 90] {
            let mut timer = Countdown::default();
            timer.toggle(&minutes.to_string());
            assert_eq!(timer.seconds_remaining(), minutes * 60);
            assert_eq!(timer.is_running(), minutes > 0);
        }
    }

    #[test]
    fn ticks_down_to_zero_and_stops() {
        let mut timer = Countdown::default();
        timer.toggle("1");
        let mut previous = timer.seconds_remaining();
        while timer.is_running() {
            assert!(timer.tick());
            assert_eq!(timer.seconds_remaining(), previous - 1);
            previous = timer.seconds_remaining();
        }
        assert_eq!(timer.seconds_remaining(), 0);
        assert!(!timer.tick());
        assert!(timer.is_editing());
    }

    #[test]
    fn pause_keeps_remaining_and_resume_does_not_reseed() {
        let mut timer = Countdown::default();
        timer.toggle("2");
        timer.tick();
        timer.toggle("2");
        assert!(!timer.is_running());
        assert!(!timer.tick());
        assert_eq!(timer.seconds_remaining(), 119);

        timer.toggle("50");
        assert!(timer.is_running());
        assert_eq!(timer.seconds_remaining(), 119);
    }

    #[test]
    fn reset_stops_and_zeroes() {
        let mut timer = Countdown::default();
        timer.toggle("3");
        timer.reset();
        assert_eq!(timer, Countdown::default());
        assert_eq!(timer.display(), "00:00");
    }

    #[test]
    fn minutes_parse_like_a_number_field() {
        assert_eq!(parse_minutes("10"), 10);
        assert_eq!(parse_minutes(" 7 "), 7);
        assert_eq!(parse_minutes("12abc"), 12);
        assert_eq!(parse_minutes(""), 0);
        assert_eq!(parse_minutes("abc"), 0);
        assert_eq!(parse_minutes("-5"), 0);
    }

    #[test]
    fn oversized_minutes_saturate_and_still_start() {
        assert_eq!(parse_minutes("99999999999999999999"), u64::MAX);
        let mut timer = Countdown::default();
        timer.toggle("99999999999999999999");
        assert!(timer.is_running());
        assert_eq!(timer.seconds_remaining(), u64::MAX);
    }

    fn shared_ticker(
        timer: &std::sync::Arc<std::sync::Mutex<Countdown>>,
    ) -> impl std::future::Future<Output = ()> + Send + 'static {
        let timer = timer.clone();
        countdown_ticker(move || {
            let mut timer = timer.lock().unwrap();
            timer.tick();
            timer.is_running()
        })
    }

    async fn advance_ms(ms: u64) {
        tokio::time::advance(std::time::Duration::from_millis(ms)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn first_decrement_lands_one_second_after_start() {
        let timer = std::sync::Arc::new(std::sync::Mutex::new(Countdown::default()));
        // Mid-way through some unrelated second.
        advance_ms(950).await;
        timer.lock().unwrap().toggle("1");
        let task = tokio::spawn(shared_ticker(&timer));

        advance_ms(999).await;
        assert_eq!(timer.lock().unwrap().seconds_remaining(), 60);
        advance_ms(1).await;
        assert_eq!(timer.lock().unwrap().seconds_remaining(), 59);

        advance_ms(59_000).await;
        assert_eq!(timer.lock().unwrap().seconds_remaining(), 0);
        assert!(!timer.lock().unwrap().is_running());
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn resume_restarts_the_second() {
        let timer = std::sync::Arc::new(std::sync::Mutex::new(Countdown::default()));
        timer.lock().unwrap().toggle("1");
        let first = tokio::spawn(shared_ticker(&timer));
        advance_ms(1500).await;
        assert_eq!(timer.lock().unwrap().seconds_remaining(), 59);

        // Pause cancels the ticker.
        timer.lock().unwrap().toggle("1");
        first.abort();
        advance_ms(5000).await;
        assert_eq!(timer.lock().unwrap().seconds_remaining(), 59);

        timer.lock().unwrap().toggle("1");
        let _second = tokio::spawn(shared_ticker(&timer));
        advance_ms(999).await;
        assert_eq!(timer.lock().unwrap().seconds_remaining(), 59);
        advance_ms(1).await;
        assert_eq!(timer.lock().unwrap().seconds_remaining(), 58);
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(599), "09:59");
        assert_eq!(format_mm_ss(6000), "100:00");
    }
}
