//! Currencies accepted for priced resources

crate::wire_enum! {
    /// ISO 4217 currency.
    ///
    /// The wire token is the uppercase ISO code.
    pub enum Currency {
        /// Euro
        Eur => "EUR",
        /// United States dollar
        Usd => "USD",
        /// Pound sterling
        Gbp => "GBP",
        /// Swiss franc
        Chf => "CHF",
        /// Canadian dollar
        Cad => "CAD",
        /// Japanese yen
        Jpy => "JPY",
    }
}

impl Currency {
    /// Number of decimal digits in the minor unit.
    pub fn minor_units(&self) -> u32 {
        match self {
            Currency::Jpy => 0,
            _ => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContractError;

    #[test]
    fn test_currency_tokens() {
        assert_eq!(Currency::Eur.as_str(), "EUR");
        assert_eq!("JPY".parse::<Currency>().unwrap(), Currency::Jpy);
        assert_eq!(
            "eur".parse::<Currency>().unwrap_err(),
            ContractError::unknown_value("Currency", "eur")
        );
    }

    #[test]
    fn test_minor_units() {
        assert_eq!(Currency::Usd.minor_units(), 2);
        assert_eq!(Currency::Jpy.minor_units(), 0);
    }
}
