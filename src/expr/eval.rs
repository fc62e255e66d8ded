// Evaluation of parsed expressions

use super::parser::{BinaryOp, Expr, UnaryOp};
use super::ExprError;
use serde::Serialize;
use std::fmt;

/// Result of evaluating an expression
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl Value {
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Int(i) => i as f64,
            Value::Float(f) => f,
        }
    }

    fn is_zero(self) -> bool {
        match self {
            Value::Int(i) => i == 0,
            Value::Float(f) => f == 0.0,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) if x.is_nan() => f.write_str("nan"),
            Value::Float(x) if x.is_infinite() => f.write_str(if x > 0.0 { "inf" } else { "-inf" }),
            // Very large or very small magnitudes switch to exponent form
            Value::Float(x) if x != 0.0 && (x.abs() >= 1e16 || x.abs() < 1e-4) => {
                write_exponent(f, x)
            }
            // Integral floats keep a trailing ".0" so they read as floats
            Value::Float(x) if x.fract() == 0.0 => write!(f, "{:.1}", x),
            Value::Float(x) => write!(f, "{}", x),
        }
    }
}

/// Shortest round-trip digits with a signed, at least two-digit exponent (`1e+16`)
fn write_exponent(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let formatted = format!("{:e}", x);
    match formatted.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", mantissa, sign, exp.abs())
        }
        None => f.write_str(&formatted),
    }
}

/// Evaluate an expression tree
pub fn eval(expr: &Expr) -> Result<Value, ExprError> {
    match expr {
        Expr::Int(i) => Ok(Value::Int(*i)),
        Expr::Float(f) => Ok(Value::Float(*f)),
        Expr::Unary(op, operand) => {
            let value = eval(operand)?;
            match (op, value) {
                (UnaryOp::Plus, v) => Ok(v),
                (UnaryOp::Neg, Value::Int(i)) => {
                    i.checked_neg().map(Value::Int).ok_or(ExprError::Overflow)
                }
                (UnaryOp::Neg, Value::Float(f)) => Ok(Value::Float(-f)),
            }
        }
        Expr::Binary(op, lhs, rhs) => {
            let lhs = eval(lhs)?;
            let rhs = eval(rhs)?;
            apply(*op, lhs, rhs)
        }
    }
}

fn apply(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value, ExprError> {
    if matches!(op, BinaryOp::Div | BinaryOp::FloorDiv | BinaryOp::Mod) && rhs.is_zero() {
        return Err(ExprError::DivisionByZero);
    }

    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => apply_int(op, a, b),
        _ => apply_float(op, lhs.as_f64(), rhs.as_f64()),
    }
}

fn apply_int(op: BinaryOp, a: i64, b: i64) -> Result<Value, ExprError> {
    let result = match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        BinaryOp::Div => return apply_float(op, a as f64, b as f64),
        BinaryOp::FloorDiv => a.checked_div(b).map(|q| {
            if a % b != 0 && (a < 0) != (b < 0) {
                q - 1
            } else {
                q
            }
        }),
        BinaryOp::Mod => {
            // i64::MIN % -1 is mathematically 0
            let r = a.wrapping_rem(b);
            Some(if r != 0 && (r < 0) != (b < 0) { r + b } else { r })
        }
        BinaryOp::Pow if b < 0 => {
            if a == 0 {
                return Err(ExprError::DivisionByZero);
            }
            return apply_float(op, a as f64, b as f64);
        }
        BinaryOp::Pow => match u32::try_from(b) {
            Ok(e) => a.checked_pow(e),
            // b is positive here, so only these bases stay in range
            Err(_) => match a {
                0 | 1 => Some(a),
                -1 => Some(if b % 2 == 0 { 1 } else { -1 }),
                _ => None,
            },
        },
    };
    result.map(Value::Int).ok_or(ExprError::Overflow)
}

fn apply_float(op: BinaryOp, a: f64, b: f64) -> Result<Value, ExprError> {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        BinaryOp::FloorDiv => float_divmod(a, b).0,
        BinaryOp::Mod => float_divmod(a, b).1,
        BinaryOp::Pow => {
            if a == 0.0 && b < 0.0 {
                return Err(ExprError::DivisionByZero);
            }
            if a < 0.0 && b.fract() != 0.0 {
                return Err(ExprError::NotReal);
            }
            a.powf(b)
        }
    };

    if !result.is_finite() && a.is_finite() && b.is_finite() {
        return Err(ExprError::Overflow);
    }
    Ok(Value::Float(result))
}

/// Floor quotient and remainder with `a == q * b + r` and `r` taking the sign of `b`.
///
/// The quotient is derived from the exact fmod remainder rather than from the
/// rounded `a / b`, so `1 // 0.1` is 9 like its remainder implies. `b` is non-zero.
fn float_divmod(a: f64, b: f64) -> (f64, f64) {
    let mut rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 {
        if (b < 0.0) != (rem < 0.0) {
            rem += b;
            div -= 1.0;
        }
    } else {
        rem = 0.0_f64.copysign(b);
    }

    let quotient = if div != 0.0 {
        let floor = div.floor();
        if div - floor > 0.5 {
            floor + 1.0
        } else {
            floor
        }
    } else {
        0.0_f64.copysign(a / b)
    };
    (quotient, rem)
}
