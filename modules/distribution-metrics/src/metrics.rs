use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,

    // Counters
    pub report_queries_total: IntCounterVec,

    // Histograms
    pub http_request_duration_seconds: HistogramVec,
    pub report_query_duration_seconds: HistogramVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let report_queries_total = IntCounterVec::new(
            Opts::new("report_queries_total", "Report queries executed"),
            &["report", "result"], // result: ok|error
        )?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request duration seconds"),
            &["path", "method", "status"],
        )?;

        let report_query_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "report_query_duration_seconds",
                "Report query round trip duration seconds",
            ),
            &["report"],
        )?;

        registry.register(Box::new(report_queries_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(report_query_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            report_queries_total,
            http_request_duration_seconds,
            report_query_duration_seconds,
        })
    }

    pub fn render(&self) -> Result<String, String> {
        let encoder = TextEncoder::new();
        let mf = self.registry.gather();
        let mut buf = Vec::new();
        encoder.encode(&mf, &mut buf).map_err(|e| e.to_string())?;
        String::from_utf8(buf).map_err(|e| e.to_string())
    }

    /// Record one report execution.
    pub fn observe_report(&self, report: &str, ok: bool, elapsed_secs: f64) {
        let result = if ok { "ok" } else { "error" };
        self.report_queries_total
            .with_label_values(&[report, result])
            .inc();
        self.report_query_duration_seconds
            .with_label_values(&[report])
            .observe(elapsed_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_report_series() {
        let metrics = Metrics::new().unwrap();
        metrics.observe_report("sales_summary", true, 0.25);
        metrics.observe_report("sales_summary", false, 0.5);

        let body = metrics.render().unwrap();
        assert!(body.contains(r#"report_queries_total{report="sales_summary",result="ok"} 1"#));
        assert!(body.contains(r#"report_queries_total{report="sales_summary",result="error"} 1"#));
        assert!(body.contains("report_query_duration_seconds_count{report=\"sales_summary\"} 2"));
    }
}
