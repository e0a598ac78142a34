//! Object storage backends for recordings and documents.

use super::ProviderKind;
use crate::descriptor::{FieldSpec, ProviderDescriptor};
use crate::metadata::MetadataKey as K;
use crate::validate::Rule;

/// S3 bucket naming: 3 to 63 chars of lowercase letters, digits, dots and
/// hyphens, starting and ending alphanumeric.
fn is_bucket_name(value: &str) -> bool {
    let bytes = value.as_bytes();
    let edge_ok = |b: Option<&u8>| b.is_some_and(|b| b.is_ascii_lowercase() || b.is_ascii_digit());
    (3..=63).contains(&bytes.len())
        && bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-' || *b == b'.')
        && edge_ok(bytes.first())
        && edge_ok(bytes.last())
}

/// `us-east-1` shaped region code.
fn is_region(value: &str) -> bool {
    let parts: Vec<&str> = value.split('-').collect();
    parts.len() >= 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()))
        && parts.last().is_some_and(|p| p.chars().all(|c| c.is_ascii_digit()))
}

const AWS: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::Storage,
    code: "aws",
    aliases: &["s3"],
    name: "Amazon S3",
    fields: &[
        FieldSpec::passthrough(K::CredentialId),
        FieldSpec::passthrough(K::StorageBucket),
        FieldSpec::new(K::StorageRegion, Some("us-east-1"), Some(is_region)),
    ],
    keep: &[K::CredentialId, K::StorageBucket, K::StorageRegion],
    passthrough: None,
    rules: &[
        Rule::Required {
            key: K::CredentialId,
            message: "Please check and provide a valid credentials for aws",
        },
        Rule::OneOf {
            key: K::StorageBucket,
            allowed: is_bucket_name,
            message: "Please check and provide a valid bucket name.",
        },
        Rule::OneOf {
            key: K::StorageRegion,
            allowed: is_region,
            message: "Please check and provide a valid region.",
        },
    ],
};

const GCP: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::Storage,
    code: "gcp",
    aliases: &["gcs", "google"],
    name: "Google Cloud Storage",
    fields: &[
        FieldSpec::passthrough(K::CredentialId),
        FieldSpec::passthrough(K::StorageBucket),
    ],
    keep: &[K::CredentialId, K::StorageBucket],
    passthrough: None,
    rules: &[
        Rule::Required {
            key: K::CredentialId,
            message: "Please check and provide a valid credentials for gcp",
        },
        Rule::Required {
            key: K::StorageBucket,
            message: "Please check and provide a valid bucket name.",
        },
    ],
};

pub(super) static DESCRIPTORS: &[ProviderDescriptor] = &[AWS, GCP];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::metadata::MetadataRecord;

    #[test]
    fn bucket_names() {
        assert!(is_bucket_name("rapida-recordings"));
        assert!(is_bucket_name("a.b.c"));
        assert!(!is_bucket_name("ab"));
        assert!(!is_bucket_name("Upper"));
        assert!(!is_bucket_name("-leading"));
        assert!(!is_bucket_name("trailing."));
    }

    #[test]
    fn regions() {
        assert!(is_region("us-east-1"));
        assert!(is_region("ap-southeast-2"));
        assert!(!is_region("us-east"));
        assert!(!is_region("US-EAST-1"));
    }

    #[test]
    fn aws_region_defaults_and_bucket_is_required() {
        let input: MetadataRecord = [("rapida.credential_id", "aws-cred")].into_iter().collect();
        let out = AWS.assemble(&input);
        assert_eq!(out.get(&K::StorageRegion), Some("us-east-1"));
        assert_eq!(
            AWS.validate(&out).unwrap_err().key.as_deref(),
            Some("storage.bucket")
        );
        assert!(AWS.is_valid(&out.with_value(K::StorageBucket, "calls-archive")));
    }

    #[test]
    fn gcp_accepts_underscored_bucket() {
        let input: MetadataRecord = [("rapida.credential_id", "gcp-cred")].into_iter().collect();
        let out = GCP.assemble(&input);
        assert_eq!(
            GCP.validate(&out).unwrap_err().key.as_deref(),
            Some("storage.bucket")
        );
        assert!(GCP.is_valid(&out.with_value(K::StorageBucket, "my_bucket")));
        assert!(!AWS.is_valid(
            &out.with_value(K::StorageBucket, "my_bucket")
                .with_value(K::StorageRegion, "us-east-1")
        ));
    }
}
