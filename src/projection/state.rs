//! Running accumulation state for the yearly series

/// Balance carried from one period to the next during a projection
#[derive(Debug, Clone, Default)]
pub struct AccumulationState {
    /// Last completed year (0 before the first year)
    pub year: u32,

    /// Compounded policy capital
    pub capital: f64,

    /// Sum of all contributions made so far
    pub cumulative_contributions: f64,
}

impl AccumulationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deposit a contribution, then grow the whole balance by one period.
    ///
    /// Growth is applied after the deposit, so a contribution earns a full
    /// period of growth in the period it is made.
    pub fn deposit_and_grow(&mut self, contribution: f64, growth_factor: f64) {
        self.cumulative_contributions += contribution;
        self.capital = (self.capital + contribution) * growth_factor;
    }

    /// Mark the current year as complete
    pub fn close_year(&mut self) {
        self.year += 1;
    }

    /// Percentage gain of capital over contributions, rounded to cents of a
    /// percent (half away from zero). Zero when nothing has been contributed.
    pub fn roi_percent(&self) -> f64 {
        if self.cumulative_contributions > 0.0 {
            let roi = (self.capital - self.cumulative_contributions) / self.cumulative_contributions * 100.0;
            round_to_cents(roi)
        } else {
            0.0
        }
    }
}

/// Round to two decimal places
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_then_grow() {
        let mut state = AccumulationState::new();
        state.deposit_and_grow(10_000.0, 1.05);
        state.close_year();

        assert_eq!(state.year, 1);
        assert_eq!(state.capital, 10_500.0);
        assert_eq!(state.cumulative_contributions, 10_000.0);
        assert_eq!(state.roi_percent(), 5.0);
    }

    #[test]
    fn test_roi_zero_without_contributions() {
        let mut state = AccumulationState::new();
        state.deposit_and_grow(0.0, 1.09);
        assert_eq!(state.roi_percent(), 0.0);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to_cents(7.625), 7.63);
        assert_eq!(round_to_cents(-7.625), -7.63);
        assert_eq!(round_to_cents(1.004), 1.0);
    }
}
