//! Arithmetic input/evaluation engine
//!
//! Holds the running operand, the keystroke log and at most one pending
//! binary operation. Evaluation is strictly left to right: pressing a second
//! operator applies the first one before the new one becomes pending.
//!
//! ```rust
//! use keypad_calculator::core::{parse_key_script, Engine};
//!
//! let mut engine = Engine::new();
//! engine.press_all(parse_key_script("2+3×4=").unwrap());
//! assert_eq!(engine.display(), "20");
//! ```

use tracing::{debug, trace};

use crate::core::format::{parse_operand, stringify};
use crate::core::operations::evaluate_with_precision;
use crate::core::{CalcResult, Digit, EngineLimits, Key, Operator};

/// The calculator state record and its transitions
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    /// Operand text currently shown
    display: String,
    /// Append-only log of keystrokes since the last clear or equals
    equation: String,
    /// Left operand captured when an operator was pressed
    previous_operand: Option<f64>,
    /// Operator waiting for its right operand
    pending_operator: Option<Operator>,
    /// Next digit starts a fresh operand instead of appending
    reset_on_next_digit: bool,
    limits: EngineLimits,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine in its initial state with default limits
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(EngineLimits::default())
    }

    /// Creates an engine with custom length and precision limits
    ///
    /// The limits are taken as given. Use [`Engine::try_with_limits`] for
    /// limits that have not been through [`EngineLimits::validate`].
    #[must_use]
    pub fn with_limits(limits: EngineLimits) -> Self {
        Self {
            display: "0".to_string(),
            equation: String::new(),
            previous_operand: None,
            pending_operator: None,
            reset_on_next_digit: false,
            limits,
        }
    }

    /// Creates an engine after checking `limits` with [`EngineLimits::validate`]
    pub fn try_with_limits(limits: EngineLimits) -> CalcResult<Self> {
        limits.validate()?;
        Ok(Self::with_limits(limits))
    }

    /// Operand text currently shown
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Keystroke log since the last clear or equals
    #[must_use]
    pub fn equation(&self) -> &str {
        &self.equation
    }

    /// Left operand of the pending operation, if any
    #[must_use]
    pub fn previous_operand(&self) -> Option<f64> {
        self.previous_operand
    }

    /// Operator awaiting its right operand, if any
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// True right after an operator or equals press
    #[must_use]
    pub fn is_reset_pending(&self) -> bool {
        self.reset_on_next_digit
    }

    /// Numeric value of the display
    #[must_use]
    pub fn value(&self) -> f64 {
        parse_operand(&self.display)
    }

    /// Limits this engine was built with
    #[must_use]
    pub fn limits(&self) -> EngineLimits {
        self.limits
    }

    /// Dispatches one button press
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.enter_digit(d),
            Key::Operator(op) => self.enter_operator(op),
            Key::Decimal => self.enter_decimal_point(),
            Key::Equals => self.press_equals(),
            Key::Clear => self.clear(),
        }
    }

    /// Applies a sequence of button presses in order
    pub fn press_all<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = Key>,
    {
        for key in keys {
            self.press(key);
        }
    }

    /// Handles a digit button.
    ///
    /// The digit always lands in the equation log, even when the display is
    /// already at its length cap and drops it.
    pub fn enter_digit(&mut self, digit: Digit) {
        let c = digit.as_char();
        if self.display == "0" || self.reset_on_next_digit {
            self.display.clear();
            self.display.push(c);
            self.reset_on_next_digit = false;
        } else if self.display.len() < self.limits.max_display_len {
            self.display.push(c);
        } else {
            trace!(digit = %c, len = self.display.len(), "digit ignored at length cap");
        }
        self.equation.push(c);
    }

    /// Handles an operator button.
    ///
    /// With an operand typed since the last operator, the pending operation
    /// is applied first and its result becomes the new left operand. Pressing
    /// operators back to back only swaps the pending operator.
    pub fn enter_operator(&mut self, op: Operator) {
        match self.previous_operand {
            None => self.previous_operand = Some(self.value()),
            Some(left) if !self.reset_on_next_digit => {
                let result = self.apply_pending(left);
                debug!(
                    left,
                    right = self.value(),
                    result,
                    next = %op,
                    "applied pending operation"
                );
                self.previous_operand = Some(result);
                self.display = stringify(result);
            }
            Some(_) => {
                trace!(
                    from = ?self.pending_operator,
                    to = %op,
                    "operator substituted"
                );
            }
        }
        self.pending_operator = Some(op);
        self.reset_on_next_digit = true;
        self.equation.push(' ');
        self.equation.push(op.symbol());
        self.equation.push(' ');
    }

    /// Handles the `=` button.
    ///
    /// Does nothing unless an operator is pending and an operand has been
    /// typed after it.
    pub fn press_equals(&mut self) {
        let (Some(_), Some(left)) = (self.pending_operator, self.previous_operand) else {
            trace!("equals ignored: no pending operation");
            return;
        };
        if self.reset_on_next_digit {
            trace!("equals ignored: no operand after operator");
            return;
        }

        let result = self.apply_pending(left);
        debug!(equation = %self.equation, result, "evaluated");
        self.display = stringify(result);
        self.equation.clear();
        self.previous_operand = None;
        self.pending_operator = None;
        self.reset_on_next_digit = true;
    }

    /// Resets every field to its initial value
    pub fn clear(&mut self) {
        debug!("cleared");
        self.display.clear();
        self.display.push('0');
        self.equation.clear();
        self.previous_operand = None;
        self.pending_operator = None;
        self.reset_on_next_digit = false;
    }

    /// Handles the `.` button. At most one decimal point per operand.
    pub fn enter_decimal_point(&mut self) {
        if self.reset_on_next_digit {
            self.display.clear();
            self.display.push_str("0.");
            self.equation.push_str("0.");
            self.reset_on_next_digit = false;
        } else if !self.display.contains('.')
            && self.display.len() < self.limits.max_len_for_decimal
        {
            self.display.push('.');
            self.equation.push('.');
        } else {
            trace!(display = %self.display, "decimal point ignored");
        }
    }

    fn apply_pending(&self, left: f64) -> f64 {
        let right = self.value();
        match self.pending_operator {
            Some(op) => evaluate_with_precision(op, left, right, self.limits.precision),
            None => right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse_key_script, CalcError};

    fn run(script: &str) -> Engine {
        let mut engine = Engine::new();
        engine.press_all(parse_key_script(script).unwrap());
        engine
    }

    fn d(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    // ===== Initial state =====

    #[test]
    fn test_new_engine_state() {
        let engine = Engine::new();
        assert_eq!(engine.display(), "0");
        assert_eq!(engine.equation(), "");
        assert_eq!(engine.previous_operand(), None);
        assert_eq!(engine.pending_operator(), None);
        assert!(!engine.is_reset_pending());
        assert_eq!(engine.limits(), EngineLimits::default());
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(Engine::default(), Engine::new());
    }

    // ===== enter_digit =====

    #[test]
    fn test_digit_replaces_leading_zero() {
        let mut engine = Engine::new();
        engine.enter_digit(d(7));
        assert_eq!(engine.display(), "7");
        assert_eq!(engine.equation(), "7");
    }

    #[test]
    fn test_zero_on_zero_stays_zero() {
        let engine = run("00");
        assert_eq!(engine.display(), "0");
        assert_eq!(engine.equation(), "00");
    }

    #[test]
    fn test_digits_append() {
        let engine = run("123");
        assert_eq!(engine.display(), "123");
        assert_eq!(engine.equation(), "123");
    }

    #[test]
    fn test_digit_cap_keeps_logging_equation() {
        let engine = run("1234567890123");
        assert_eq!(engine.display(), "123456789012");
        assert_eq!(engine.display().len(), 12);
        // The log still records the dropped thirteenth digit.
        assert_eq!(engine.equation(), "1234567890123");
    }

    #[test]
    fn test_digit_after_operator_starts_fresh_operand() {
        let engine = run("12+3");
        assert_eq!(engine.display(), "3");
        assert!(!engine.is_reset_pending());
    }

    // ===== enter_operator =====

    #[test]
    fn test_first_operator_captures_operand() {
        let engine = run("42+");
        assert_eq!(engine.previous_operand(), Some(42.0));
        assert_eq!(engine.pending_operator(), Some(Operator::Add));
        assert!(engine.is_reset_pending());
        assert_eq!(engine.display(), "42");
        assert_eq!(engine.equation(), "42 + ");
    }

    #[test]
    fn test_try_with_limits_accepts_valid() {
        let limits = EngineLimits {
            precision: 3,
            ..EngineLimits::default()
        };
        let engine = Engine::try_with_limits(limits).unwrap();
        assert_eq!(engine.limits(), limits);
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_try_with_limits_rejects_decimal_cap_at_display_cap() {
        let limits = EngineLimits {
            max_display_len: 4,
            max_len_for_decimal: 4,
            ..EngineLimits::default()
        };
        assert!(matches!(
            Engine::try_with_limits(limits),
            Err(CalcError::InvalidLimits { .. })
        ));
    }

    #[test]
    fn test_try_with_limits_rejects_huge_precision() {
        let limits = EngineLimits {
            precision: 1_000_000,
            ..EngineLimits::default()
        };
        assert!(Engine::try_with_limits(limits).is_err());
    }

    #[test]
    fn test_operator_on_fresh_engine_uses_zero() {
        let engine = run("-5=");
        assert_eq!(engine.display(), "-5");
    }

    #[test]
    fn test_chained_operator_applies_pending() {
        let engine = run("2+3×");
        assert_eq!(engine.display(), "5");
        assert_eq!(engine.previous_operand(), Some(5.0));
        assert_eq!(engine.pending_operator(), Some(Operator::Multiply));
        assert_eq!(engine.equation(), "2 + 3 × ");
    }

    #[test]
    fn test_operator_substitution_does_not_recompute() {
        let engine = run("7+-");
        assert_eq!(engine.previous_operand(), Some(7.0));
        assert_eq!(engine.pending_operator(), Some(Operator::Subtract));
        assert_eq!(engine.display(), "7");
        assert_eq!(engine.equation(), "7 +  - ");
    }

    // ===== press_equals =====

    #[test]
    fn test_simple_addition() {
        let engine = run("5+3=");
        assert_eq!(engine.display(), "8");
        assert_eq!(engine.equation(), "");
        assert_eq!(engine.previous_operand(), None);
        assert_eq!(engine.pending_operator(), None);
        assert!(engine.is_reset_pending());
    }

    #[test]
    fn test_division_by_zero_shows_zero() {
        assert_eq!(run("9÷0=").display(), "0");
    }

    #[test]
    fn test_left_to_right_evaluation() {
        assert_eq!(run("2+3×4=").display(), "20");
    }

    #[test]
    fn test_last_operator_wins() {
        assert_eq!(run("7+-2=").display(), "5");
    }

    #[test]
    fn test_one_third_rounded() {
        assert_eq!(run("1÷3=").display(), "0.33333333");
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        let mut engine = run("12");
        let before = engine.clone();
        engine.press_equals();
        assert_eq!(engine, before);
    }

    #[test]
    fn test_equals_right_after_operator_is_noop() {
        let mut engine = run("12+");
        let before = engine.clone();
        engine.press_equals();
        assert_eq!(engine, before);
    }

    #[test]
    fn test_repeated_equals_is_noop() {
        let mut engine = run("6×7=");
        let before = engine.clone();
        engine.press_equals();
        assert_eq!(engine, before);
        assert_eq!(engine.display(), "42");
    }

    #[test]
    fn test_digit_after_equals_starts_new_number() {
        let engine = run("6×7=9");
        assert_eq!(engine.display(), "9");
        assert_eq!(engine.equation(), "9");
    }

    #[test]
    fn test_operator_after_equals_continues_from_result() {
        let engine = run("6×7=-2=");
        assert_eq!(engine.display(), "40");
    }

    #[test]
    fn test_negative_result() {
        assert_eq!(run("3-8=").display(), "-5");
    }

    #[test]
    fn test_negative_zero_is_shown_as_zero() {
        assert_eq!(run("0-0=").display(), "0");
        assert_eq!(run("5-9=×0=").display(), "0");
    }

    // ===== clear =====

    #[test]
    fn test_clear_resets_everything() {
        let mut engine = run("12+3.4");
        engine.clear();
        assert_eq!(engine, Engine::new());
        assert_eq!(engine.display(), "0");
        assert_eq!(engine.equation(), "");
    }

    #[test]
    fn test_clear_preserves_limits() {
        let limits = EngineLimits {
            max_display_len: 6,
            max_len_for_decimal: 5,
            precision: 2,
        };
        let mut engine = Engine::with_limits(limits);
        engine.press(Key::Clear);
        assert_eq!(engine.limits(), limits);
    }

    // ===== enter_decimal_point =====

    #[test]
    fn test_second_decimal_point_ignored() {
        let engine = run("1..5");
        assert_eq!(engine.display(), "1.5");
        assert_eq!(engine.equation(), "1.5");
    }

    #[test]
    fn test_decimal_on_initial_zero() {
        let engine = run(".5");
        assert_eq!(engine.display(), "0.5");
        assert_eq!(engine.equation(), ".5");
    }

    #[test]
    fn test_decimal_after_operator_inserts_leading_zero() {
        let engine = run("3+.");
        assert_eq!(engine.display(), "0.");
        assert_eq!(engine.equation(), "3 + 0.");
        assert!(!engine.is_reset_pending());
    }

    #[test]
    fn test_decimal_after_equals() {
        let engine = run("1+1=.25");
        assert_eq!(engine.display(), "0.25");
    }

    #[test]
    fn test_decimal_refused_at_length_cap() {
        let mut engine = run("12345678901");
        engine.enter_decimal_point();
        assert_eq!(engine.display(), "12345678901");
        assert_eq!(engine.equation(), "12345678901");
    }

    #[test]
    fn test_decimal_allowed_below_cap() {
        let engine = run("1234567890.1");
        assert_eq!(engine.display(), "1234567890.1");
    }

    #[test]
    fn test_trailing_decimal_operand() {
        assert_eq!(run("3.+2=").display(), "5");
    }

    // ===== custom limits =====

    #[test]
    fn test_custom_limits() {
        let mut engine = Engine::with_limits(EngineLimits {
            max_display_len: 4,
            max_len_for_decimal: 3,
            precision: 3,
        });
        engine.press_all(parse_key_script("123456").unwrap());
        assert_eq!(engine.display(), "1234");
        engine.press_all(parse_key_script("C2÷3=").unwrap());
        assert_eq!(engine.display(), "0.667");
    }

    #[test]
    fn test_value_reads_display() {
        assert_eq!(run("12.5").value(), 12.5);
        assert_eq!(run("7.").value(), 7.0);
    }
}
