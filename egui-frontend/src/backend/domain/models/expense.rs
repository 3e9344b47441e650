use shared::ExpenseCategory;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("Item cannot be empty")]
    EmptyItem,
    #[error("Amount cannot be empty")]
    EmptyAmount,
    #[error("Category must be selected")]
    MissingCategory,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Amount must be positive")]
    NonPositiveAmount,
}

/// Validated form input, ready to become an `Expense`
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedExpense {
    pub item: String,
    pub amount: f64,
    pub category: ExpenseCategory,
}

/// Parse amount text such as "12.50", "$12.50" or "1,200"
///
/// Only a leading currency symbol is accepted, and commas must sit between
/// groups of three digits.
pub fn parse_amount(input: &str, currency_symbol: &str) -> Result<f64, ExpenseValidationError> {
    let trimmed = input.trim();
    let number = if currency_symbol.is_empty() {
        trimmed
    } else {
        trimmed.strip_prefix(currency_symbol).unwrap_or(trimmed)
    };

    if number.is_empty() {
        return Err(ExpenseValidationError::EmptyAmount);
    }

    let cleaned = strip_thousands_separators(number)
        .ok_or_else(|| ExpenseValidationError::InvalidAmount(format!("misplaced comma in '{}'", trimmed)))?;

    let amount = cleaned
        .parse::<f64>()
        .map_err(|e| ExpenseValidationError::InvalidAmount(e.to_string()))?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(ExpenseValidationError::NonPositiveAmount);
    }

    Ok(amount)
}

/// Drop commas from the whole-number part when they group digits by three
fn strip_thousands_separators(number: &str) -> Option<String> {
    if !number.contains(',') {
        return Some(number.to_string());
    }

    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (number, ""),
    };
    if fraction.contains(',') {
        return None;
    }

    let digits = whole.strip_prefix('-').unwrap_or(whole);
    let is_digits = |group: &str| group.bytes().all(|b| b.is_ascii_digit());
    let mut groups = digits.split(',');
    let leading_ok = groups.next().is_some_and(|g| (1..=3).contains(&g.len()) && is_digits(g));
    if !leading_ok || !groups.all(|g| g.len() == 3 && is_digits(g)) {
        return None;
    }

    Some(number.replace(',', ""))
}
