use wheel_shared::{CatalogError, PrizeCatalog, PrizeOption};

/// The prizes on offer, in the order they are laid out clockwise.
pub fn prize_options() -> Vec<PrizeOption> {
    vec![
        PrizeOption::new("Big Win (3x)", 3.0),
        PrizeOption::new("Try Again (0.5x)", 0.5),
        PrizeOption::new("Small Prize (1x)", 1.0),
        PrizeOption::new("Bonus Spins (2x)", 2.0),
        PrizeOption::new("No Luck (0.5x)", 0.5),
        PrizeOption::new("$10 Gift (1x)", 1.0),
        PrizeOption::new("Jackpot! (4x)", 4.0),
        PrizeOption::new("Coupon (1x)", 1.0),
    ]
}

pub fn prize_catalog() -> Result<PrizeCatalog, CatalogError> {
    PrizeCatalog::new(prize_options())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = prize_catalog().unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.total_weight(), 13.0);
        assert_eq!(catalog.options()[0].name, "Big Win (3x)");
        assert_eq!(catalog.options()[7].name, "Coupon (1x)");
    }

    #[test]
    fn test_default_catalog_labels_read_upright_at_rest() {
        use wheel_shared::constants::POINTER_FRAME_OFFSET_DEG;
        use wheel_shared::Wheel;

        let wheel = Wheel::new(prize_catalog().unwrap());
        for segment in wheel.segments() {
            let on_screen = (segment.text_rotation + POINTER_FRAME_OFFSET_DEG).rem_euclid(360.0);
            assert!(
                !(on_screen > 90.0 && on_screen < 270.0),
                "{} is drawn at {:.2}°",
                segment.name,
                on_screen
            );
        }
    }
}
