use super::Pizza;
use std::time::Duration;

/// Oven time for every [`Margherita`].
pub const MARGHERITA_BAKING_TIME: Duration = Duration::from_secs(90);

/// Oven time for every [`Funghi`].
pub const FUNGHI_BAKING_TIME: Duration = Duration::from_secs(2 * 60);

/// Tomato, mozzarella, basil. Priced by the caller, always bakes in
/// [`MARGHERITA_BAKING_TIME`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margherita {
    price: f64,
}

impl Margherita {
    pub fn new(price: f64) -> Self {
        Self { price }
    }
}

impl Pizza for Margherita {
    fn name(&self) -> String {
        "Margherita".to_string()
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn baking_time(&self) -> Duration {
        MARGHERITA_BAKING_TIME
    }
}

/// Mushroom pizza. Priced by the caller, always bakes in [`FUNGHI_BAKING_TIME`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Funghi {
    price: f64,
}

impl Funghi {
    pub fn new(price: f64) -> Self {
        Self { price }
    }
}

impl Pizza for Funghi {
    fn name(&self) -> String {
        "Funghi".to_string()
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn baking_time(&self) -> Duration {
        FUNGHI_BAKING_TIME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margherita_uses_caller_price_and_fixed_baking_time() {
        let pizza = Margherita::new(25.0);
        assert_eq!(pizza.name(), "Margherita");
        assert_eq!(pizza.price(), 25.0);
        assert_eq!(pizza.baking_time(), MARGHERITA_BAKING_TIME);
    }

    #[test]
    fn test_funghi_uses_caller_price_and_fixed_baking_time() {
        let pizza = Funghi::new(30.0);
        assert_eq!(pizza.name(), "Funghi");
        assert_eq!(pizza.price(), 30.0);
        assert_eq!(pizza.baking_time(), Duration::from_secs(120));
    }
}
