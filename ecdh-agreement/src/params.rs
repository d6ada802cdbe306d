use crate::AgreementError;
use ecdh_curve::{BigInt, Curve, Point};

use serde::{Deserialize, Serialize};

use std::sync::Arc;

/// Domain parameters as they appear in a configuration source.
///
/// Integers are strings so that values beyond `i64` survive any serde
/// format. Both decimal and `0x` prefixed hexadecimal are accepted.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveConfig {
    pub a: String,
    pub b: String,
    pub field_size: String,
    pub generator: (String, String),
}

/// Curve coefficients, field size and generator of a key exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    pub a: BigInt,
    pub b: BigInt,
    pub field_size: BigInt,
    pub generator: (BigInt, BigInt),
}

impl TryFrom<CurveConfig> for CurveParams {
    type Error = AgreementError;
    fn try_from(config: CurveConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            a: parse_int(&config.a)?,
            b: parse_int(&config.b)?,
            field_size: parse_int(&config.field_size)?,
            generator: (
                parse_int(&config.generator.0)?,
                parse_int(&config.generator.1)?,
            ),
        })
    }
}

impl From<&CurveParams> for CurveConfig {
    fn from(params: &CurveParams) -> Self {
        Self {
            a: params.a.to_string(),
            b: params.b.to_string(),
            field_size: params.field_size.to_string(),
            generator: (
                params.generator.0.to_string(),
                params.generator.1.to_string(),
            ),
        }
    }
}

impl CurveParams {
    /// `y^2 = x^3 + 7x + 3` over `F(37)` with generator `(2, 5)`.
    pub fn demo() -> Self {
        Self {
            a: BigInt::from(7),
            b: BigInt::from(3),
            field_size: BigInt::from(37),
            generator: (BigInt::from(2), BigInt::from(5)),
        }
    }

    pub fn curve(&self) -> Result<Arc<Curve>, AgreementError> {
        let curve = Curve::new(self.a.clone(), self.b.clone(), self.field_size.clone())?;
        Ok(Arc::new(curve))
    }

    pub fn generator(&self) -> Result<Point, AgreementError> {
        let (x, y) = self.generator.clone();
        Ok(Point::new(&self.curve()?, x, y, "Generator")?)
    }
}

fn parse_int(value: &str) -> Result<BigInt, AgreementError> {
    let trimmed = value.trim();
    let parsed = match trimmed.strip_prefix("0x") {
        Some(hex) => BigInt::parse_bytes(hex.as_bytes(), 16),
        None => BigInt::parse_bytes(trimmed.as_bytes(), 10),
    };
    parsed.ok_or_else(|| AgreementError::InvalidParameter(value.to_owned()))
}

#[cfg(test)]
mod test {
    use super::*;
    use ecdh_curve::CurveError;

    #[test]
    fn demo_parameters() {
        let params = CurveParams::demo();
        let curve = params.curve().unwrap();
        assert_eq!(curve.to_string(), "y^2 = x^3 + 7x + 3 on finite field F(37).");

        let generator = params.generator().unwrap();
        assert_eq!(generator.to_string(), "Point Generator = (2, 5)");
        assert_eq!(generator.curve().as_ref(), curve.as_ref());
    }

    #[test]
    fn parse_config() {
        let json = r#"{
            "a": "7",
            "b": "0x3",
            "fieldSize": " 37 ",
            "generator": ["2", "-32"]
        }"#;
        let config: CurveConfig = serde_json::from_str(json).unwrap();
        let params = CurveParams::try_from(config).unwrap();
        assert_eq!(params.a, BigInt::from(7));
        assert_eq!(params.b, BigInt::from(3));
        assert_eq!(params.field_size, BigInt::from(37));
        assert_eq!(params.generator, (BigInt::from(2), BigInt::from(-32)));
        // -32 is reduced to 5
        assert_eq!(params.generator().unwrap(), CurveParams::demo().generator().unwrap());
    }

    #[test]
    fn config_round_trip() {
        let params = CurveParams::demo();
        let json = serde_json::to_string(&CurveConfig::from(&params)).unwrap();
        let config: CurveConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(CurveParams::try_from(config).unwrap(), params);
    }

    #[test]
    fn invalid_config() {
        let config = CurveConfig {
            a: "seven".to_string(),
            b: "3".to_string(),
            field_size: "37".to_string(),
            generator: ("2".to_string(), "5".to_string()),
        };
        assert_eq!(
            CurveParams::try_from(config).unwrap_err(),
            AgreementError::InvalidParameter("seven".to_string())
        );

        let config = CurveConfig {
            a: "7".to_string(),
            b: "3".to_string(),
            field_size: "0x".to_string(),
            generator: ("2".to_string(), "5".to_string()),
        };
        assert!(CurveParams::try_from(config).is_err());

        let params = CurveParams {
            field_size: BigInt::from(-37),
            ..CurveParams::demo()
        };
        assert_eq!(
            params.curve().unwrap_err(),
            AgreementError::Curve(CurveError::NonPositiveField(BigInt::from(-37)))
        );
    }
}
