use entity::sea_orm_active_enums::{AccountingProvider, FeeType};

/// A row of the default fee type catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeTypeDefault {
    pub fee_type: FeeType,
    pub label: &'static str,
    pub quickbooks_account_code: &'static str,
    pub xero_account_code: &'static str,
}

/// Catalog seeded into `fee_types` on every startup. Existing rows are never overwritten.
pub const DEFAULT_FEE_TYPES: [FeeTypeDefault; 5] = [
    FeeTypeDefault {
        fee_type: FeeType::Tuition,
        label: "Tuition",
        quickbooks_account_code: "4000",
        xero_account_code: "200",
    },
    FeeTypeDefault {
        fee_type: FeeType::Costume,
        label: "Costume",
        quickbooks_account_code: "4100",
        xero_account_code: "210",
    },
    FeeTypeDefault {
        fee_type: FeeType::Competition,
        label: "Competition",
        quickbooks_account_code: "4200",
        xero_account_code: "220",
    },
    FeeTypeDefault {
        fee_type: FeeType::Recital,
        label: "Recital",
        quickbooks_account_code: "4300",
        xero_account_code: "230",
    },
    FeeTypeDefault {
        fee_type: FeeType::Other,
        label: "Other",
        quickbooks_account_code: "4900",
        xero_account_code: "260",
    },
];

/// Accounting providers that get a disconnected connection row per studio.
pub const ACCOUNTING_PROVIDERS: [AccountingProvider; 2] =
    [AccountingProvider::Quickbooks, AccountingProvider::Xero];

/// Studio key used when none is configured.
pub const DEFAULT_STUDIO_KEY: &str = "default";
