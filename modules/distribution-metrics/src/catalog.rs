//! Report catalog: the allow-lists every report is allowed to filter and group by.
//!
//! Built once at startup, checked, and shared read-only across requests.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::query_builder::{AllowList, AllowListEntry};

/// Every report the service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReportId {
    DatasetFilters,
    ProductData,
    DailySalesAvg,
    MtdSalesDetail,
    SalesSummary,
    SalesSummaryTotal,
    PerDaySales,
    SalesGrowthNational,
    SalesGrowthNationalTable,
    InventoryAvailable,
    InventoryRequired,
    SalesBranchWiseDetail,
    SalesBranchWiseGrowth,
    SalesAchievements,
    SalesAchievementsTotal,
}

impl ReportId {
    pub const ALL: [ReportId; 15] = [
        ReportId::DatasetFilters,
        ReportId::ProductData,
        ReportId::DailySalesAvg,
        ReportId::MtdSalesDetail,
        ReportId::SalesSummary,
        ReportId::SalesSummaryTotal,
        ReportId::PerDaySales,
        ReportId::SalesGrowthNational,
        ReportId::SalesGrowthNationalTable,
        ReportId::InventoryAvailable,
        ReportId::InventoryRequired,
        ReportId::SalesBranchWiseDetail,
        ReportId::SalesBranchWiseGrowth,
        ReportId::SalesAchievements,
        ReportId::SalesAchievementsTotal,
    ];

    /// Stable label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportId::DatasetFilters => "dataset_filters",
            ReportId::ProductData => "product_data",
            ReportId::DailySalesAvg => "daily_sales_avg",
            ReportId::MtdSalesDetail => "mtd_sales_detail",
            ReportId::SalesSummary => "sales_summary",
            ReportId::SalesSummaryTotal => "sales_summary_total",
            ReportId::PerDaySales => "per_day_sales",
            ReportId::SalesGrowthNational => "sales_growth_national",
            ReportId::SalesGrowthNationalTable => "sales_growth_national_table",
            ReportId::InventoryAvailable => "inventory_available",
            ReportId::InventoryRequired => "inventory_required",
            ReportId::SalesBranchWiseDetail => "sales_branch_wise_detail",
            ReportId::SalesBranchWiseGrowth => "sales_branch_wise_growth",
            ReportId::SalesAchievements => "sales_achievements",
            ReportId::SalesAchievementsTotal => "sales_achievements_total",
        }
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Group-by configuration: permitted keys and the key used when `groupBy` is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupBySpec {
    pub allow_list: AllowList,
    pub default_key: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportDefinition {
    pub id: ReportId,
    pub filters: AllowList,
    pub group_by: Option<GroupBySpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Report {0} is not registered in the catalog")]
    MissingReport(ReportId),

    #[error("Report {0} is registered more than once")]
    DuplicateReport(ReportId),

    #[error("Report {report}: default groupBy key '{key}' is not in its group-by allow-list")]
    InvalidDefaultGroupBy { report: ReportId, key: &'static str },

    #[error("Report {report}: allow-list key '{key}' is defined more than once")]
    DuplicateAllowListKey { report: ReportId, key: &'static str },
}

/// Immutable report configuration keyed by [`ReportId`].
#[derive(Debug, Clone)]
pub struct ReportCatalog {
    reports: BTreeMap<ReportId, ReportDefinition>,
}

impl ReportCatalog {
    /// Build a catalog from explicit definitions, rejecting inconsistent configuration.
    pub fn new(definitions: &[ReportDefinition]) -> Result<Self, CatalogError> {
        let mut reports = BTreeMap::new();
        for definition in definitions {
            validate_definition(definition)?;
            if reports.insert(definition.id, *definition).is_some() {
                return Err(CatalogError::DuplicateReport(definition.id));
            }
        }

        if let Some(missing) = ReportId::ALL.iter().find(|id| !reports.contains_key(*id)) {
            return Err(CatalogError::MissingReport(*missing));
        }

        Ok(Self { reports })
    }

    /// The service's report table.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(&STANDARD_REPORTS)
    }

    pub fn get(&self, id: ReportId) -> Result<&ReportDefinition, CatalogError> {
        self.reports.get(&id).ok_or(CatalogError::MissingReport(id))
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

fn validate_definition(definition: &ReportDefinition) -> Result<(), CatalogError> {
    if let Some(key) = definition.filters.duplicate_key() {
        return Err(CatalogError::DuplicateAllowListKey {
            report: definition.id,
            key,
        });
    }

    if let Some(spec) = &definition.group_by {
        if let Some(key) = spec.allow_list.duplicate_key() {
            return Err(CatalogError::DuplicateAllowListKey {
                report: definition.id,
                key,
            });
        }
        if !spec.allow_list.contains(spec.default_key) {
            return Err(CatalogError::InvalidDefaultGroupBy {
                report: definition.id,
                key: spec.default_key,
            });
        }
    }

    Ok(())
}

// ============================================================
// ALLOW-LISTS
// ============================================================

/// Grouping over `vw_invoice_productmap` columns, unqualified.
const INVOICE_GROUP_BY: AllowList = AllowList::new(&[
    AllowListEntry::new("Ctg", r#""Ctg""#),
    AllowListEntry::new("AD", r#""AD""#),
    AllowListEntry::new("Team_Desc", r#""Team_Desc""#),
    AllowListEntry::new("BU_Desc", r#""BU_Desc""#),
    AllowListEntry::new("grp_brand", "grp_brand"),
    AllowListEntry::new("branch_description", "branch_description"),
    AllowListEntry::new("channel", "channel"),
    AllowListEntry::new("data_flag", "data_flag"),
    AllowListEntry::new("prod_nm", "prod_nm"),
]);

/// Filters over `vw_invoice_productmap` aliased as `t01`.
const INVOICE_FILTERS: AllowList = AllowList::new(&[
    AllowListEntry::new("AD", r#"t01."AD""#),
    AllowListEntry::new("Team_Desc", r#"t01."Team_Desc""#),
    AllowListEntry::new("BU_Desc", r#"t01."BU_Desc""#),
    AllowListEntry::new("Ctg", r#"t01."Ctg""#),
    AllowListEntry::new("grp_brand", "t01.grp_brand"),
    AllowListEntry::new("branch_description", "t01.branch_description"),
    AllowListEntry::new("channel", "t01.channel"),
    AllowListEntry::new("data_flag", "t01.data_flag"),
    AllowListEntry::new("prod_nm", "t01.prod_nm"),
]);

/// Invoice filters plus the region joined in from `product_region` (`t02`).
const REGIONAL_INVOICE_FILTERS: AllowList = AllowList::new(&[
    AllowListEntry::new("AD", r#"t01."AD""#),
    AllowListEntry::new("Team_Desc", r#"t01."Team_Desc""#),
    AllowListEntry::new("BU_Desc", r#"t01."BU_Desc""#),
    AllowListEntry::new("Ctg", r#"t01."Ctg""#),
    AllowListEntry::new("grp_brand", "t01.grp_brand"),
    AllowListEntry::new("branch_description", "t01.branch_description"),
    AllowListEntry::new("channel", "t01.channel"),
    AllowListEntry::new("data_flag", "t01.data_flag"),
    AllowListEntry::new("prod_nm", "t01.prod_nm"),
    AllowListEntry::new("region_desc", "t02.region_desc"),
]);

const ACHIEVEMENT_GROUP_BY: AllowList = AllowList::new(&[
    AllowListEntry::new("AD", r#"t01."AD""#),
    AllowListEntry::new("BU_Desc", r#"t01."BU_Desc""#),
    AllowListEntry::new("Team_Desc", r#"t01."Team_Desc""#),
    AllowListEntry::new("grp_brand", "t01.grp_brand"),
    AllowListEntry::new("prod_nm", "t01.prod_nm"),
    AllowListEntry::new("Ctg", r#"t01."Ctg""#),
]);

/// National growth reads the lower-case column variants of the invoice view.
const NATIONAL_GROUP_BY: AllowList = AllowList::new(&[
    AllowListEntry::new("grp_brand", "grp_brand"),
    AllowListEntry::new("team_desc", "team_desc"),
    AllowListEntry::new("bu_desc", "bu_desc"),
]);

const NATIONAL_FILTERS: AllowList = AllowList::new(&[
    AllowListEntry::new("AD", "t01.ad"),
    AllowListEntry::new("Team_Desc", "t01.team_desc"),
    AllowListEntry::new("BU_Desc", "t01.bu_desc"),
    AllowListEntry::new("Ctg", "t01.ctg"),
    AllowListEntry::new("grp_brand", "t01.grp_brand"),
    AllowListEntry::new("branch_description", "t01.branch_description"),
    AllowListEntry::new("channel", "t01.channel"),
    AllowListEntry::new("data_flag", "t01.data_flag"),
    AllowListEntry::new("prod_nm", "t01.prod_nm"),
]);

const DAILY_FILTERS: AllowList = AllowList::new(&[
    AllowListEntry::new("AD", "ad"),
    AllowListEntry::new("Team_Desc", "team_desc"),
    AllowListEntry::new("BU_Desc", "bu_desc"),
    AllowListEntry::new("Ctg", "ctg"),
    AllowListEntry::new("grp_brand", "grp_brand"),
    AllowListEntry::new("branch_description", "branch_description"),
    AllowListEntry::new("channel", "channel"),
    AllowListEntry::new("data_flag", "data_flag"),
    AllowListEntry::new("prod_nm", "prod_nm"),
]);

/// Inventory reports filter the invoice view aliased as `t02`.
const INVENTORY_FILTERS: AllowList = AllowList::new(&[
    AllowListEntry::new("AD", r#"t02."AD""#),
    AllowListEntry::new("BU_Desc", r#"t02."BU_Desc""#),
    AllowListEntry::new("Team_Desc", r#"t02."Team_Desc""#),
    AllowListEntry::new("grp_brand", "t02.grp_brand"),
    AllowListEntry::new("prod_nm", "t02.prod_nm"),
    AllowListEntry::new("data_flag", "t02.data_flag"),
    AllowListEntry::new("channel", "t02.channel"),
    AllowListEntry::new("branch_description", "t02.branch_description"),
]);

const fn fixed(id: ReportId) -> ReportDefinition {
    ReportDefinition {
        id,
        filters: AllowList::EMPTY,
        group_by: None,
    }
}

const fn filtered(id: ReportId, filters: AllowList) -> ReportDefinition {
    ReportDefinition {
        id,
        filters,
        group_by: None,
    }
}

const fn grouped(
    id: ReportId,
    filters: AllowList,
    group_by: AllowList,
    default_key: &'static str,
) -> ReportDefinition {
    ReportDefinition {
        id,
        filters,
        group_by: Some(GroupBySpec {
            allow_list: group_by,
            default_key,
        }),
    }
}

const STANDARD_REPORTS: [ReportDefinition; 15] = [
    fixed(ReportId::DatasetFilters),
    fixed(ReportId::ProductData),
    fixed(ReportId::DailySalesAvg),
    fixed(ReportId::MtdSalesDetail),
    grouped(ReportId::SalesSummary, REGIONAL_INVOICE_FILTERS, INVOICE_GROUP_BY, "Ctg"),
    filtered(ReportId::SalesSummaryTotal, REGIONAL_INVOICE_FILTERS),
    filtered(ReportId::PerDaySales, DAILY_FILTERS),
    grouped(ReportId::SalesGrowthNational, NATIONAL_FILTERS, NATIONAL_GROUP_BY, "team_desc"),
    filtered(ReportId::SalesGrowthNationalTable, NATIONAL_FILTERS),
    filtered(ReportId::InventoryAvailable, INVENTORY_FILTERS),
    filtered(ReportId::InventoryRequired, INVENTORY_FILTERS),
    grouped(ReportId::SalesBranchWiseDetail, INVOICE_FILTERS, INVOICE_GROUP_BY, "Ctg"),
    fixed(ReportId::SalesBranchWiseGrowth),
    grouped(ReportId::SalesAchievements, INVOICE_FILTERS, ACHIEVEMENT_GROUP_BY, "Ctg"),
    filtered(ReportId::SalesAchievementsTotal, INVOICE_FILTERS),
];
