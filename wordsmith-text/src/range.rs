//! Bounded range of Roman numerals
//!
//! `roman_range` validates every argument up front and hands back a lazy
//! iterator; nothing is encoded until the caller pulls an item.

use std::iter::FusedIterator;
use wordsmith_plugin::prelude::*;
use crate::roman::{encode, MAX_VALUE, MIN_VALUE};
use crate::TextError;

/// Lazy walk from `start` towards `stop` (inclusive) by `step`
#[derive(Debug, Clone)]
pub struct RomanRange {
    current: i64,
    stop: i64,
    step: i64,
    done: bool,
}

fn bound_error(name: &str) -> TextError {
    TextError::OutOfRange(format!(
        "\"{}\" must be an integer in the range {}-{}",
        name, MIN_VALUE, MAX_VALUE
    ))
}

fn check_bound(name: &str, value: i64, allow_negative: bool) -> Result<(), TextError> {
    let bounds = MIN_VALUE..=MAX_VALUE;
    if bounds.contains(&value) || (allow_negative && bounds.contains(&value.saturating_neg())) {
        Ok(())
    } else {
        Err(bound_error(name))
    }
}

/// Build a range, rejecting bounds outside 1-3999 and walks that cannot reach `stop`
pub fn roman_range(stop: i64, start: i64, step: i64) -> Result<RomanRange, TextError> {
    check_bound("stop", stop, false)?;
    check_bound("start", start, false)?;
    check_bound("step", step, true)?;

    // The first step may not overshoot unless the walk is a single item
    let forward_exceed = step > 0 && (start > stop || (start != stop && start + step > stop));
    let backward_exceed = step < 0 && (start < stop || (start != stop && start + step < stop));
    if forward_exceed || backward_exceed {
        return Err(TextError::Infeasible);
    }

    Ok(RomanRange { current: start, stop, step, done: false })
}

impl RomanRange {
    fn passed_stop(&self) -> bool {
        if self.step > 0 { self.current > self.stop } else { self.current < self.stop }
    }

    fn remaining(&self) -> usize {
        if self.done || self.passed_stop() {
            return 0;
        }
        ((self.stop - self.current) / self.step) as usize + 1
    }
}

impl Iterator for RomanRange {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        if self.passed_stop() {
            self.done = true;
            return None;
        }

        let value = self.current;
        self.current = value + self.step;
        if value == self.stop {
            self.done = true;
        }
        encode(value).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for RomanRange {}

impl FusedIterator for RomanRange {}

/// Arguments of [`roman_range`] with `start = 1` and `step = 1` by default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeArgs {
    pub stop: i64,
    pub start: i64,
    pub step: i64,
}

impl RangeArgs {
    pub fn new(stop: i64) -> Self {
        Self { stop, start: 1, step: 1 }
    }

    pub fn start(mut self, start: i64) -> Self {
        self.start = start;
        self
    }

    pub fn step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    pub fn build(self) -> Result<RomanRange, TextError> {
        roman_range(self.stop, self.start, self.step)
    }
}

// ============ RomanRangeFn ============

pub struct RomanRangeFn;

static ROMAN_RANGE_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("stop", "Number", "Last value (inclusive), 1-3999"),
    ArgMeta::optional("start", "Number", "First value, 1-3999", "1"),
    ArgMeta::optional("step", "Number", "Increment, negative to walk backwards", "1"),
];

static ROMAN_RANGE_EXAMPLES: [&str; 3] = [
    "roman_range(4) → [\"I\", \"II\", \"III\", \"IV\"]",
    "roman_range(1, 3, -1) → [\"III\", \"II\", \"I\"]",
    "roman_range(100, 10, 200) → #ERROR",
];

static ROMAN_RANGE_RELATED: [&str; 1] = ["roman_encode"];

/// Integer argument of the range; anything else is reported as out of range
fn range_arg(args: &[Value], index: usize, name: &str, default: i64) -> Result<i64, WordsmithError> {
    match args.get(index) {
        Some(Value::Null) | None => Ok(default),
        Some(Value::Number(n)) => n.to_i64().ok_or_else(|| bound_error(name).into()),
        Some(Value::Error(e)) => Err(e.clone()),
        Some(_) => Err(bound_error(name).into()),
    }
}

impl FunctionPlugin for RomanRangeFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "roman_range",
            description: "List Roman numerals from start to stop (inclusive) by step",
            usage: "roman_range(stop, [start], [step])",
            args: &ROMAN_RANGE_ARGS,
            returns: "List<Text>",
            examples: &ROMAN_RANGE_EXAMPLES,
            category: "text/roman",
            related: &ROMAN_RANGE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() || args.len() > 3 {
            return Value::Error(WordsmithError::arg_count("roman_range", 1, args.len()));
        }

        let parsed = range_arg(args, 0, "stop", 1).and_then(|stop| {
            let start = range_arg(args, 1, "start", 1)?;
            let step = range_arg(args, 2, "step", 1)?;
            Ok(RangeArgs::new(stop).start(start).step(step))
        });
        let range_args = match parsed {
            Ok(a) => a,
            Err(e) => return Value::Error(e.in_function("roman_range")),
        };

        match range_args.build() {
            Ok(range) => Value::List(range.map(Value::Text).collect()),
            Err(e) => Value::Error(WordsmithError::from(e).in_function("roman_range")),
        }
    }
}
