/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

pub trait AsKey: Clone {
    fn as_key(&self) -> String;
    fn as_prefix(&self) -> String;
}

impl AsKey for &str {
    fn as_key(&self) -> String {
        self.to_string()
    }

    fn as_prefix(&self) -> String {
        format!("{self}.")
    }
}

impl AsKey for String {
    fn as_key(&self) -> String {
        self.clone()
    }

    fn as_prefix(&self) -> String {
        format!("{self}.")
    }
}

impl AsKey for &String {
    fn as_key(&self) -> String {
        self.to_string()
    }

    fn as_prefix(&self) -> String {
        format!("{self}.")
    }
}

impl AsKey for (&str, &str) {
    fn as_key(&self) -> String {
        format!("{}.{}", self.0, self.1)
    }

    fn as_prefix(&self) -> String {
        format!("{}.{}.", self.0, self.1)
    }
}

impl AsKey for (&String, &str) {
    fn as_key(&self) -> String {
        format!("{}.{}", self.0, self.1)
    }

    fn as_prefix(&self) -> String {
        format!("{}.{}.", self.0, self.1)
    }
}

impl AsKey for (&str, &String) {
    fn as_key(&self) -> String {
        format!("{}.{}", self.0, self.1)
    }

    fn as_prefix(&self) -> String {
        format!("{}.{}.", self.0, self.1)
    }
}

pub trait ParseValue: Sized {
    fn parse_value(value: &str) -> Result<Self, String>;
}

impl ParseValue for String {
    fn parse_value(value: &str) -> Result<Self, String> {
        Ok(value.to_string())
    }
}

impl ParseValue for bool {
    fn parse_value(value: &str) -> Result<Self, String> {
        match value {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(format!("Invalid boolean value {value:?}.")),
        }
    }
}

impl ParseValue for u64 {
    fn parse_value(value: &str) -> Result<Self, String> {
        parse_size(value)
    }
}

impl ParseValue for usize {
    fn parse_value(value: &str) -> Result<Self, String> {
        parse_size(value).and_then(|v| {
            usize::try_from(v).map_err(|_| format!("Value {value:?} is out of range."))
        })
    }
}

impl ParseValue for u32 {
    fn parse_value(value: &str) -> Result<Self, String> {
        value
            .parse()
            .map_err(|_| format!("Invalid integer value {value:?}."))
    }
}

impl ParseValue for u8 {
    fn parse_value(value: &str) -> Result<Self, String> {
        value
            .parse()
            .map_err(|_| format!("Invalid integer value {value:?}."))
    }
}

impl ParseValue for i64 {
    fn parse_value(value: &str) -> Result<Self, String> {
        value
            .parse()
            .map_err(|_| format!("Invalid integer value {value:?}."))
    }
}

impl<T: ParseValue> ParseValue for Option<T> {
    fn parse_value(value: &str) -> Result<Self, String> {
        if value.is_empty()
            || value.eq_ignore_ascii_case("false")
            || value.eq_ignore_ascii_case("disable")
            || value.eq_ignore_ascii_case("disabled")
            || value.eq_ignore_ascii_case("never")
        {
            Ok(None)
        } else {
            T::parse_value(value).map(Some)
        }
    }
}

// Accepts plain integers or sizes such as "512kb", "25mb" or "1gb".
fn parse_size(value: &str) -> Result<u64, String> {
    let value = value.trim();
    let split = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);
    let number = number
        .parse::<u64>()
        .map_err(|_| format!("Invalid size value {value:?}."))?;
    let multiplier = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "b" => 1,
        "k" | "kb" => 1024,
        "m" | "mb" => 1024 * 1024,
        "g" | "gb" => 1024 * 1024 * 1024,
        _ => return Err(format!("Invalid size unit in {value:?}.")),
    };
    number
        .checked_mul(multiplier)
        .ok_or_else(|| format!("Size value {value:?} is too large."))
}
