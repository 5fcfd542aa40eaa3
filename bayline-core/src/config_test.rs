#[cfg(test)]
mod tests {
    use crate::config::{EngineConfig, MAX_SPOTS_PER_CLASS};
    use crate::error::ConfigError;
    use crate::types::ResourceClass;

    #[test]
    fn test_defaults_match_lot_layout() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.capacities.get(ResourceClass::Car), 27);
        assert_eq!(config.rates.get(ResourceClass::Truck), 80.0);
        assert_eq!(config.time_scale_ms(), 30_000);
        assert_eq!(config.ttl_ms(), 48 * 30_000);
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = EngineConfig::from_json(r#"{ "time_scale_secs": 60 }"#).unwrap();
        assert_eq!(config.time_scale_secs, 60);
        assert_eq!(config.discount_fraction, 0.20);
        assert_eq!(config.capacities, EngineConfig::default().capacities);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            EngineConfig::from_json(r#"{ "time_scale_secs": 0 }"#),
            Err(ConfigError::ZeroTimeScale)
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{ "discount_fraction": 1.5 }"#),
            Err(ConfigError::InvalidDiscount(_))
        ));

        let mut config = EngineConfig::default();
        config.rates.set(ResourceClass::Bike, -1.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRate { class: ResourceClass::Bike, .. })
        ));
    }

    #[test]
    fn test_oversized_capacity_is_rejected() {
        let mut config = EngineConfig::default();
        config.capacities.set(ResourceClass::Car, MAX_SPOTS_PER_CLASS);
        assert!(config.validate().is_ok());

        let json = r#"{ "capacities": {
            "car": 4000000000, "bike": 1, "truck": 1, "emergency": 1, "eco_friendly": 1
        } }"#;
        assert!(matches!(
            EngineConfig::from_json(json),
            Err(ConfigError::CapacityTooLarge {
                class: ResourceClass::Car,
                count: 4_000_000_000,
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        assert!(matches!(
            EngineConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        assert!(matches!(
            EngineConfig::from_path("/nonexistent/bayline.json"),
            Err(ConfigError::Io { .. })
        ));
    }
}
