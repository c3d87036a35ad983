//! Fixed report SQL.
//!
//! Splice points are filled by `compose_template`; templates carry no trailing
//! semicolon because the executor wraps them in `row_to_json`.

use crate::query_builder::SqlTemplate;

// ============================================================
// PASS-THROUGH VIEWS
// ============================================================

pub const DATASET_FILTERS: SqlTemplate =
    SqlTemplate::new("dataset_filters", "SELECT * FROM mv_datasets_filter");

pub const DAILY_SALES_AVG: SqlTemplate =
    SqlTemplate::new("daily_sales_avg", "SELECT * FROM vw_RDs_Per_Day_Sales_Avg");

pub const MTD_SALES_DETAIL: SqlTemplate =
    SqlTemplate::new("mtd_sales_detail", "SELECT * FROM MTD_Sales_Detailed mps");

// ============================================================
// PRODUCT DATA (paginated)
// ============================================================

pub const PRODUCT_DATA_COUNT: SqlTemplate = SqlTemplate::new(
    "product_data_count",
    r#"
    SELECT COUNT(*) AS total
    FROM vw_invoice_productmap
    WHERE billing_date BETWEEN $1 AND $2
    "#,
);

pub const PRODUCT_DATA_PAGE: SqlTemplate = SqlTemplate::new(
    "product_data_page",
    r#"
    SELECT *
    FROM vw_invoice_productmap
    WHERE billing_date BETWEEN $1 AND $2
    LIMIT $3 OFFSET $4
    "#,
);

// ============================================================
// SALES SUMMARY
// ============================================================

pub const SALES_SUMMARY_TP: SqlTemplate = SqlTemplate::new(
    "sales_summary_tp",
    r#"
    SELECT
        {select},
        SUM(CASE
            WHEN billing_date >= DATE_TRUNC('month', CURRENT_DATE)
            AND  billing_date <= CURRENT_DATE
            THEN gross_amount ELSE 0
        END) AS CMV,
        SUM(CASE
            WHEN billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month')
            AND  billing_date <  DATE_TRUNC('month', CURRENT_DATE)
            THEN gross_amount ELSE 0
        END) AS PMV,
        ROUND(
            (
                SUM(CASE
                    WHEN billing_date >= DATE_TRUNC('month', CURRENT_DATE)
                    AND  billing_date <= CURRENT_DATE
                    THEN gross_amount ELSE 0
                END)::numeric
                -
                SUM(CASE
                    WHEN billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month')
                    AND  billing_date <  DATE_TRUNC('month', CURRENT_DATE)
                    THEN gross_amount ELSE 0
                END)::numeric
            )
            /
            NULLIF(
                SUM(CASE
                    WHEN billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month')
                    AND  billing_date <  DATE_TRUNC('month', CURRENT_DATE)
                    THEN gross_amount ELSE 0
                END)::numeric
            , 0)
            * 100
        , 1) AS "S_Grw%"
    FROM vw_invoice_productmap t01
    INNER JOIN public.product_region t02 ON t01.branch_id = t02.org_id::text
    WHERE
        billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month')
        AND billing_date <= CURRENT_DATE
        {filters}
    GROUP BY {group_by}
    ORDER BY {group_by}
    "#,
);

pub const SALES_SUMMARY_EFP: SqlTemplate = SqlTemplate::new(
    "sales_summary_efp",
    r#"
    SELECT
        {select},
        SUM(CASE
            WHEN billing_date >= DATE_TRUNC('month', CURRENT_DATE)
            AND  billing_date <= CURRENT_DATE
            THEN "EFP_Cur" * sold_qty ELSE 0
        END) AS CMV,
        SUM(CASE
            WHEN billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month')
            AND  billing_date <= (CURRENT_DATE - INTERVAL '1 month')
            THEN "EFP" * sold_qty ELSE 0
        END) AS PMV,
        ROUND(
            (
                SUM(CASE
                    WHEN billing_date >= DATE_TRUNC('month', CURRENT_DATE)
                    AND  billing_date <= CURRENT_DATE
                    THEN "EFP_Cur" * sold_qty ELSE 0
                END)::numeric
                -
                SUM(CASE
                    WHEN billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month')
                    AND  billing_date <= (CURRENT_DATE - INTERVAL '1 month')
                    THEN "EFP" * sold_qty ELSE 0
                END)::numeric
            )
            /
            NULLIF(
                SUM(CASE
                    WHEN billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month')
                    AND  billing_date <= (CURRENT_DATE - INTERVAL '1 month')
                    THEN "EFP" * sold_qty ELSE 0
                END)::numeric
            , 0)
            * 100
        , 1) AS "S_Grw%"
    FROM vw_invoice_productmap t01
    INNER JOIN public.product_region t02 ON t01.branch_id = t02.org_id::text
    WHERE
        billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month')
        AND billing_date <= CURRENT_DATE
        {filters}
    GROUP BY {group_by}
    ORDER BY {group_by}
    "#,
);

pub const SALES_SUMMARY_TOTAL: SqlTemplate = SqlTemplate::new(
    "sales_summary_total",
    r#"
    WITH mtd AS (
        SELECT
            SUM(CASE WHEN billing_date >= DATE_TRUNC('month', CURRENT_DATE)
                      AND billing_date <= CURRENT_DATE
                     THEN sold_qty ELSE 0 END) AS cm_units,
            SUM(CASE WHEN billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month')
                      AND billing_date <= (CURRENT_DATE - INTERVAL '1 month')
                     THEN sold_qty ELSE 0 END) AS lm_units,
            SUM(CASE WHEN billing_date >= DATE_TRUNC('month', CURRENT_DATE)
                      AND billing_date <= CURRENT_DATE
                     THEN gross_amount ELSE 0 END) AS cm_tp,
            SUM(CASE WHEN billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month')
                      AND billing_date <= (CURRENT_DATE - INTERVAL '1 month')
                     THEN gross_amount ELSE 0 END) AS lm_tp,
            SUM(CASE WHEN billing_date >= DATE_TRUNC('month', CURRENT_DATE)
                      AND billing_date <= CURRENT_DATE
                     THEN "EFP_Cur" * sold_qty ELSE 0 END) AS cm_efp,
            SUM(CASE WHEN billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month')
                      AND billing_date <= (CURRENT_DATE - INTERVAL '1 month')
                     THEN "EFP" * sold_qty ELSE 0 END) AS lm_efp
        FROM vw_invoice_productmap t01
        INNER JOIN public.product_region t02 ON t01.branch_id = t02.org_id::text
        WHERE
            billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month')
            AND billing_date <= CURRENT_DATE
            {filters}
    )
    SELECT
        cm_units AS RD_CMU,
        lm_units AS RD_LMU,
        ROUND((cm_units::numeric - lm_units::numeric) / NULLIF(lm_units::numeric, 0) * 100, 1) AS "RD_Unit_Grw%",
        cm_tp AS RD_CMS_TP,
        lm_tp AS RD_LMS_TP,
        ROUND((cm_tp::numeric - lm_tp::numeric) / NULLIF(lm_tp::numeric, 0) * 100, 1) AS "RD_TP_Val%",
        cm_efp AS RD_CMS_EFP,
        lm_efp AS RD_LMS_EFP,
        ROUND((cm_efp::numeric - lm_efp::numeric) / NULLIF(lm_efp::numeric, 0) * 100, 1) AS "RD_EFP_Val%"
    FROM mtd
    "#,
);

// ============================================================
// PER-DAY SALES
// ============================================================

pub const PER_DAY_SALES_TP: SqlTemplate = SqlTemplate::new(
    "per_day_sales_tp",
    r#"
    SELECT
        billing_date,
        SUM(gross_amount)    AS CMV,
        SUM(efp * sold_qty)  AS RD_CMS_EFP,
        SUM(sold_qty)        AS RD_CMU
    FROM vw_invoice_productmap
    WHERE billing_date >= DATE_TRUNC('month', CURRENT_DATE)
      AND billing_date <= CURRENT_DATE
      {filters}
    GROUP BY billing_date
    ORDER BY billing_date
    "#,
);

pub const PER_DAY_SALES_EFP: SqlTemplate = SqlTemplate::new(
    "per_day_sales_efp",
    r#"
    SELECT
        billing_date,
        SUM(gross_amount) AS CMV
    FROM vw_invoice_productmap
    WHERE billing_date >= DATE_TRUNC('month', CURRENT_DATE)
      AND billing_date <= CURRENT_DATE
      {filters}
    GROUP BY billing_date
    ORDER BY billing_date
    "#,
);

// ============================================================
// NATIONAL SALES GROWTH
// ============================================================

pub const SALES_GROWTH_NATIONAL_UNITS: SqlTemplate = SqlTemplate::new(
    "sales_growth_national_units",
    r#"
    SELECT * FROM (
        SELECT
            {select},
            SUM(CASE WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE) AND t01.billing_date <= CURRENT_DATE THEN t01.sold_qty ELSE 0 END) AS RD_CMU,
            SUM(CASE WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE) AND t01.billing_date <= CURRENT_DATE THEN efp * t01.sold_qty ELSE 0 END) AS CMV,
            SUM(CASE WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month') AND t01.billing_date <= (CURRENT_DATE - INTERVAL '1 month') THEN t01.sold_qty ELSE 0 END) AS RD_LMU,
            SUM(CASE WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month') AND t01.billing_date <= (CURRENT_DATE - INTERVAL '1 month') THEN efp * t01.sold_qty ELSE 0 END) AS PMV,
            ROUND(
                (
                    SUM(CASE WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE) AND t01.billing_date <= CURRENT_DATE THEN efp * t01.sold_qty ELSE 0 END)::numeric
                    -
                    SUM(CASE WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month') AND t01.billing_date <= (CURRENT_DATE - INTERVAL '1 month') THEN efp * t01.sold_qty ELSE 0 END)::numeric
                )
                / NULLIF(
                    SUM(CASE WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month') AND t01.billing_date <= (CURRENT_DATE - INTERVAL '1 month') THEN efp * t01.sold_qty ELSE 0 END)::numeric
                , 0) * 100
            , 1) AS "S_Grw%"
        FROM vw_invoice_productmap t01
        WHERE t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month')
          AND t01.billing_date <= CURRENT_DATE
          {filters}
        GROUP BY {group_by}
    ) a
    "#,
);

pub const SALES_GROWTH_NATIONAL_TP: SqlTemplate = SqlTemplate::new(
    "sales_growth_national_tp",
    r#"
    SELECT * FROM (
        SELECT
            {select},
            SUM(CASE
                WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE)
                AND  t01.billing_date <= CURRENT_DATE
                THEN t01.gross_amount ELSE 0
            END) AS RD_CMS_TP,
            SUM(CASE
                WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month')
                AND  t01.billing_date <= (CURRENT_DATE - INTERVAL '1 month')
                THEN t01.gross_amount ELSE 0
            END) AS RD_LMS_TP,
            ROUND(
                (
                    SUM(CASE
                        WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE)
                        AND  t01.billing_date <= CURRENT_DATE
                        THEN t01.gross_amount ELSE 0
                    END)::numeric
                    -
                    SUM(CASE
                        WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month')
                        AND  t01.billing_date <= (CURRENT_DATE - INTERVAL '1 month')
                        THEN t01.gross_amount ELSE 0
                    END)::numeric
                )
                /
                NULLIF(
                    SUM(CASE
                        WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month')
                        AND  t01.billing_date <= (CURRENT_DATE - INTERVAL '1 month')
                        THEN t01.gross_amount ELSE 0
                    END)::numeric
                , 0)
                * 100
            , 1) AS "S_Grw%"
        FROM vw_invoice_productmap t01
        WHERE t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month')
          AND t01.billing_date <= CURRENT_DATE
          {filters}
        GROUP BY {group_by}
    ) a
    "#,
);

pub const SALES_GROWTH_NATIONAL_TABLE: SqlTemplate = SqlTemplate::new(
    "sales_growth_national_table",
    r#"
    SELECT
        ad,
        team_desc,
        bu_desc,
        ctg,
        branch_description,
        channel,
        data_flag,
        grp_brand,
        SUM(CASE WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE) AND t01.billing_date <= CURRENT_DATE THEN t01.sold_qty ELSE 0 END) AS RD_CMU,
        SUM(CASE WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE) AND t01.billing_date <= CURRENT_DATE THEN efp * t01.sold_qty ELSE 0 END) AS CMV,
        SUM(CASE WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month') AND t01.billing_date <= (CURRENT_DATE - INTERVAL '1 month') THEN t01.sold_qty ELSE 0 END) AS RD_LMU,
        SUM(CASE WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month') AND t01.billing_date <= (CURRENT_DATE - INTERVAL '1 month') THEN efp * t01.sold_qty ELSE 0 END) AS PMV,
        ROUND(
            (
                SUM(CASE WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE) AND t01.billing_date <= CURRENT_DATE THEN efp * t01.sold_qty ELSE 0 END)::numeric
                -
                SUM(CASE WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month') AND t01.billing_date <= (CURRENT_DATE - INTERVAL '1 month') THEN efp * t01.sold_qty ELSE 0 END)::numeric
            )
            / NULLIF(
                SUM(CASE WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month') AND t01.billing_date <= (CURRENT_DATE - INTERVAL '1 month') THEN efp * t01.sold_qty ELSE 0 END)::numeric
            , 0) * 100
        , 1) AS "S_Grw%"
    FROM vw_invoice_productmap t01
    WHERE t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month')
      AND t01.billing_date <= CURRENT_DATE
      AND ad IS NOT NULL
      {filters}
    GROUP BY
        ad,
        team_desc,
        bu_desc,
        ctg,
        branch_description,
        channel,
        data_flag,
        grp_brand
    "#,
);

// ============================================================
// PRODUCT INVENTORY
// ============================================================

pub const INVENTORY_AVAILABLE: SqlTemplate = SqlTemplate::new(
    "inventory_available",
    r#"
    WITH products AS (
        SELECT DISTINCT t02.sap_mapping_code, t02.prod_nm
        FROM vw_invoice_productmap t02
        WHERE t02.billing_date >= DATE_TRUNC('month', CURRENT_DATE)
          AND t02.billing_date <= CURRENT_DATE
          {filters}
    ),
    stock AS (
        SELECT ibl_item_code, SUM(stock_qty) AS stock_qty_MTD
        FROM vw_primary_secondary_stock
        WHERE dated >= DATE_TRUNC('month', CURRENT_DATE)
          AND dated <= CURRENT_DATE
        GROUP BY ibl_item_code
    )
    SELECT
        p.prod_nm,
        COALESCE(s.stock_qty_MTD, 0) AS stock_qty_MTD
    FROM products p
    LEFT JOIN stock s ON s.ibl_item_code::text = p.sap_mapping_code::text
    ORDER BY p.prod_nm
    "#,
);

pub const INVENTORY_REQUIRED: SqlTemplate = SqlTemplate::new(
    "inventory_required",
    r#"
    WITH stock AS (
        SELECT ibl_item_code, SUM(stock_qty) AS TotalInvQty
        FROM vw_primary_secondary_stock
        WHERE dated >= DATE_TRUNC('month', CURRENT_DATE)
          AND dated <= CURRENT_DATE
        GROUP BY ibl_item_code
    ),
    sales AS (
        SELECT sap_mapping_code, prod_nm, SUM(sold_qty) AS RD_CMU
        FROM vw_invoice_productmap t02
        WHERE billing_date >= DATE_TRUNC('month', CURRENT_DATE)
          AND billing_date <= CURRENT_DATE
          {filters}
        GROUP BY sap_mapping_code, prod_nm
    ),
    targets AS (
        SELECT material_code, SUM(target_qty) AS TrgUnit
        FROM vw_tscl_sap_targets
        WHERE target_date = DATE_TRUNC('month', CURRENT_DATE)::date
        GROUP BY material_code
    )
    SELECT
        s.prod_nm,
        COALESCE(st.TotalInvQty, 0) - (COALESCE(t.TrgUnit, 0) - COALESCE(s.RD_CMU, 0)) AS ReqInv
    FROM sales s
    LEFT JOIN stock st ON st.ibl_item_code::text = s.sap_mapping_code::text
    LEFT JOIN targets t ON t.material_code::text = s.sap_mapping_code::text
    ORDER BY s.prod_nm
    "#,
);

// ============================================================
// BRANCH-WISE (distributor) SALES
// ============================================================

pub const SALES_BRANCH_WISE_DETAIL: SqlTemplate = SqlTemplate::new(
    "sales_branch_wise_detail",
    r#"
    WITH stock AS (
        SELECT ibl_item_code, distributor_desc, SUM(stock_qty) AS TotalInvQty
        FROM vw_primary_secondary_stock
        WHERE dated >= DATE_TRUNC('month', CURRENT_DATE)
          AND dated <= CURRENT_DATE
        GROUP BY ibl_item_code, distributor_desc
    ),
    sales AS (
        SELECT t01.sap_code,
            SUM(CASE WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE) AND t01.billing_date <= CURRENT_DATE THEN t01.gross_amount ELSE 0 END) AS RD_CMS_TP,
            SUM(CASE WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month') AND t01.billing_date <= (CURRENT_DATE - INTERVAL '1 month') THEN t01.gross_amount ELSE 0 END) AS RD_LMS_TP
        FROM vw_invoice_productmap t01
        WHERE t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month')
          AND t01.billing_date <= CURRENT_DATE
          {filters}
        GROUP BY t01.sap_code
    )
    SELECT
        st.distributor_desc,
        SUM(COALESCE(s.RD_CMS_TP, 0)) AS RD_CMS_TP,
        SUM(COALESCE(s.RD_LMS_TP, 0)) AS RD_LMS_TP
    FROM stock st
    LEFT JOIN sales s ON s.sap_code::text = st.ibl_item_code::text
    GROUP BY st.distributor_desc
    ORDER BY st.distributor_desc
    "#,
);

pub const SALES_BRANCH_WISE_GROWTH: SqlTemplate = SqlTemplate::new(
    "sales_branch_wise_growth",
    r#"
    WITH stock AS (
        SELECT ibl_item_code, distributor_desc, SUM(stock_qty) AS TotalInvQty
        FROM vw_primary_secondary_stock
        WHERE dated >= DATE_TRUNC('month', CURRENT_DATE)
          AND dated <= CURRENT_DATE
        GROUP BY ibl_item_code, distributor_desc
    ),
    sales AS (
        SELECT sap_code,
            SUM(CASE WHEN billing_date >= DATE_TRUNC('month', CURRENT_DATE) AND billing_date <= CURRENT_DATE THEN gross_amount ELSE 0 END) AS RD_CMS_TP,
            SUM(CASE WHEN billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month') AND billing_date <= (CURRENT_DATE - INTERVAL '1 month') THEN gross_amount ELSE 0 END) AS RD_LMS_TP
        FROM vw_invoice_productmap
        WHERE billing_date >= DATE_TRUNC('month', CURRENT_DATE - INTERVAL '1 month')
          AND billing_date <= CURRENT_DATE
        GROUP BY sap_code
    )
    SELECT
        st.distributor_desc,
        ROUND(
            (SUM(COALESCE(s.RD_CMS_TP, 0))::numeric - SUM(COALESCE(s.RD_LMS_TP, 0))::numeric)
            / NULLIF(SUM(COALESCE(s.RD_LMS_TP, 0))::numeric, 0) * 100
        , 1) AS "RD_TP_Val%"
    FROM stock st
    LEFT JOIN sales s ON s.sap_code::text = st.ibl_item_code::text
    GROUP BY st.distributor_desc
    ORDER BY st.distributor_desc
    "#,
);

// ============================================================
// SALES ACHIEVEMENTS (vs SAP targets)
// ============================================================

pub const SALES_ACHIEVEMENTS: SqlTemplate = SqlTemplate::new(
    "sales_achievements",
    r#"
    SELECT
        {select},
        SUM(CASE WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE) AND t01.billing_date <= CURRENT_DATE THEN t01."EFP_Cur" * t01.sold_qty ELSE 0 END) AS RD_CMS_EFP,
        SUM(CASE WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE) AND t01.billing_date <= CURRENT_DATE THEN t03.target_value ELSE 0 END) AS TrgVal,
        ROUND(
            SUM(CASE WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE) AND t01.billing_date <= CURRENT_DATE THEN t01."EFP_Cur" * t01.sold_qty ELSE 0 END)::numeric
            / NULLIF(
                SUM(CASE WHEN t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE) AND t01.billing_date <= CURRENT_DATE THEN t03.target_value ELSE 0 END)::numeric
            , 0) * 100
        , 1) AS "SalAch%"
    FROM vw_invoice_productmap t01
    LEFT JOIN vw_tscl_sap_targets t03
        ON t01.sap_code::text = t03.material_code::text
        AND t03.target_date = DATE_TRUNC('month', t01.billing_date::timestamp with time zone)::date
    WHERE t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE)
      AND t01.billing_date <= CURRENT_DATE
      {filters}
    GROUP BY {group_by}
    ORDER BY {group_by}
    "#,
);

pub const SALES_ACHIEVEMENTS_TOTAL: SqlTemplate = SqlTemplate::new(
    "sales_achievements_total",
    r#"
    WITH mtd AS (
        SELECT
            SUM(t01.sold_qty) AS sold_units,
            SUM(t03.target_qty) AS target_units,
            SUM(t01."EFP_Cur" * t01.sold_qty) AS sold_value,
            SUM(t03.target_value) AS target_value
        FROM vw_invoice_productmap t01
        LEFT JOIN vw_tscl_sap_targets t03
            ON t01.sap_code::text = t03.material_code::text
            AND t03.target_date = DATE_TRUNC('month', t01.billing_date::timestamp with time zone)::date
        WHERE t01.billing_date >= DATE_TRUNC('month', CURRENT_DATE)
          AND t01.billing_date <= CURRENT_DATE
          {filters}
    )
    SELECT
        COALESCE(sold_units, 0) AS salesunit,
        COALESCE(target_units, 0) AS TrgUnit,
        ROUND(sold_units::numeric / NULLIF(target_units::numeric, 0) * 100, 1) AS "UnitAch%",
        COALESCE(sold_value, 0) AS sales_EFP,
        COALESCE(target_value, 0) AS Target,
        ROUND(sold_value::numeric / NULLIF(target_value::numeric, 0) * 100, 1) AS "SalAch%"
    FROM mtd
    "#,
);
