use crate::errors::CalcError;
use std::fmt;

#[derive(Debug, Clone, Copy)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Folds a float back to an integer when it has no fractional part
    /// and fits in `i64`.
    pub fn normalized(v: f64) -> Self {
        if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
            Number::Integer(v as i64)
        } else {
            Number::Float(v)
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(n) => *n as f64,
            Number::Float(x) => *x,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(n) => *n == 0,
            Number::Float(x) => *x == 0.0,
        }
    }

    pub fn add(&self, other: &Number) -> Result<Number, CalcError> {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => {
                a.checked_add(*b).map(Number::Integer).ok_or(CalcError::Overflow)
            }
            (a, b) => Ok(Number::Float(a.as_f64() + b.as_f64())),
        }
    }

    pub fn sub(&self, other: &Number) -> Result<Number, CalcError> {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => {
                a.checked_sub(*b).map(Number::Integer).ok_or(CalcError::Overflow)
            }
            (a, b) => Ok(Number::Float(a.as_f64() - b.as_f64())),
        }
    }

    pub fn mul(&self, other: &Number) -> Result<Number, CalcError> {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => {
                a.checked_mul(*b).map(Number::Integer).ok_or(CalcError::Overflow)
            }
            (a, b) => Ok(Number::Float(a.as_f64() * b.as_f64())),
        }
    }

    pub fn div(&self, other: &Number) -> Result<Number, CalcError> {
        if other.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        Ok(Number::Float(self.as_f64() / other.as_f64()))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Integer(n)
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Number::Float(x)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(v) => write!(f, "{v}"),
            Number::Float(v) => write!(f, "{v:?}"),
        }
    }
}
