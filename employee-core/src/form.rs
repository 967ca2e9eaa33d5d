use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all required fields")]
    MissingFields,
}

/// Raw values of the four form controls, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub designation: String,
    pub location: String,
    pub salary: String,
}

/// What a valid submission would have created. Only ever logged.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DraftSubmission {
    pub name: String,
    pub designation: String,
    pub location: String,
    pub salary: f64,
}

impl DraftSubmission {
    pub fn success_message(&self) -> String {
        format!("Employee \"{}\" has been successfully added!", self.name)
    }

    /// JSON form for the console log. A NaN salary is written as `null`.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable draft: {e}>"))
    }
}

impl FormFields {
    /// Validate and build a draft. Name and location are trimmed before the
    /// emptiness check; designation and salary are used as entered.
    pub fn submit(&self) -> Result<DraftSubmission, FormError> {
        let name = self.name.trim();
        let location = self.location.trim();
        if name.is_empty()
            || self.designation.is_empty()
            || location.is_empty()
            || self.salary.is_empty()
        {
            return Err(FormError::MissingFields);
        }

        Ok(DraftSubmission {
            name: name.to_string(),
            designation: self.designation.clone(),
            location: location.to_string(),
            salary: parse_float(&self.salary),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Parse the longest numeric prefix, after leading whitespace, the way
/// `parseFloat` does. Anything without a numeric prefix is NaN.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
