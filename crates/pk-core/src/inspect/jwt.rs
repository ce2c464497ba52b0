use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use super::InspectError;
use crate::encoding::{Base64UrlCodec, Codec};

/// Header and claims of a JSON Web Token.
///
/// Decoding only: the signature is kept verbatim and never verified.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedJwt {
    pub header: Value,
    pub payload: Value,
    pub signature: String,
}

impl DecodedJwt {
    pub fn algorithm(&self) -> Option<&str> {
        self.header.get("alg")?.as_str()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp_claim("exp")
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp_claim("iat")
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> Option<bool> {
        self.expires_at().map(|exp| exp <= now)
    }

    fn timestamp_claim(&self, claim: &str) -> Option<DateTime<Utc>> {
        let secs = self.payload.get(claim)?.as_i64()?;
        Utc.timestamp_opt(secs, 0).single()
    }
}

fn decode_segment(segment: &'static str, raw: &str) -> Result<Value, InspectError> {
    let text = Base64UrlCodec
        .decode(raw)
        .map_err(|source| InspectError::JwtSegment { segment, source })?;
    serde_json::from_str(&text).map_err(|e| InspectError::JwtJson {
        segment,
        detail: e.to_string(),
    })
}

pub fn decode_jwt(token: &str) -> Result<DecodedJwt, InspectError> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    let [header, payload, signature] = parts.as_slice() else {
        return Err(InspectError::JwtSegmentCount(parts.len()));
    };

    Ok(DecodedJwt {
        header: decode_segment("header", header)?,
        payload: decode_segment("payload", payload)?,
        signature: signature.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::CodecKind;

    fn token(header: &str, payload: &str) -> String {
        format!(
            "{}.{}.sig",
            CodecKind::Base64Url.encode(header),
            CodecKind::Base64Url.encode(payload)
        )
    }

    #[test]
    fn decodes_header_and_payload() {
        let jwt = decode_jwt(&token(
            r#"{"alg":"HS256","typ":"JWT"}"#,
            r#"{"sub":"123","exp":1700000000,"iat":1690000000}"#,
        ))
        .unwrap();

        assert_eq!(jwt.algorithm(), Some("HS256"));
        assert_eq!(jwt.payload["sub"], "123");
        assert_eq!(jwt.signature, "sig");
        assert_eq!(jwt.expires_at().unwrap().timestamp(), 1_700_000_000);
        assert_eq!(jwt.issued_at().unwrap().timestamp(), 1_690_000_000);
    }

    #[test]
    fn expiry_comparison() {
        let jwt = decode_jwt(&token(r#"{"alg":"none"}"#, r#"{"exp":100}"#)).unwrap();
        let later = Utc.timestamp_opt(200, 0).single().unwrap();
        let earlier = Utc.timestamp_opt(50, 0).single().unwrap();
        assert_eq!(jwt.is_expired_at(later), Some(true));
        assert_eq!(jwt.is_expired_at(earlier), Some(false));
    }

    #[test]
    fn missing_exp_is_none() {
        let jwt = decode_jwt(&token(r#"{"alg":"none"}"#, r#"{"sub":"x"}"#)).unwrap();
        assert!(jwt.expires_at().is_none());
        assert!(jwt.is_expired_at(Utc::now()).is_none());
    }

    #[test]
    fn wrong_segment_count() {
        assert_eq!(
            decode_jwt("only.two").unwrap_err(),
            InspectError::JwtSegmentCount(2)
        );
    }

    #[test]
    fn header_must_be_base64url_json() {
        let err = decode_jwt("!!!.e30.sig").unwrap_err();
        assert!(matches!(err, InspectError::JwtSegment { segment: "header", .. }));

        let not_json = format!("{}.e30.sig", CodecKind::Base64Url.encode("plain"));
        let err = decode_jwt(&not_json).unwrap_err();
        assert!(matches!(err, InspectError::JwtJson { segment: "header", .. }));
    }
}
