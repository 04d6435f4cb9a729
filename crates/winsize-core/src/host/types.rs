/// A dynamically-typed value as handed over by the host environment
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Null,
}

impl HostValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            HostValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Numeric value converted to a 32-bit integer.
    ///
    /// Follows host integer conversion: NaN and infinities become 0, other
    /// values truncate toward zero and wrap modulo 2^32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            HostValue::Number(number) => Some(to_int32(*number)),
            _ => None,
        }
    }
}

fn to_int32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let wrapped = value.trunc().rem_euclid(4_294_967_296.0);
    wrapped as u32 as i32
}

impl From<&str> for HostValue {
    fn from(text: &str) -> Self {
        HostValue::Text(text.to_string())
    }
}

impl From<String> for HostValue {
    fn from(text: String) -> Self {
        HostValue::Text(text)
    }
}

impl From<f64> for HostValue {
    fn from(number: f64) -> Self {
        HostValue::Number(number)
    }
}

impl From<i32> for HostValue {
    fn from(number: i32) -> Self {
        HostValue::Number(f64::from(number))
    }
}

impl From<bool> for HostValue {
    fn from(value: bool) -> Self {
        HostValue::Boolean(value)
    }
}
