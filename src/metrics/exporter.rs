use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::HeapMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for heap metrics snapshots.
///
/// Writes the Prometheus text exposition format so the output can be
/// scraped or forwarded to a collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Returns the inner writer, recovering it if the lock was poisoned.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_metric(&self, kind: &str, name: &str, value: u64) {
        let mut writer = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, name: &str, value: u64) {
        self.write_metric("counter", name, value);
    }

    fn write_gauge(&self, name: &str, value: u64) {
        self.write_metric("gauge", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<HeapMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &HeapMetricsSnapshot) {
        self.write_counter(&self.metric_name("push_calls_total"), snapshot.push_calls);
        self.write_counter(&self.metric_name("pop_calls_total"), snapshot.pop_calls);
        self.write_counter(&self.metric_name("pop_empty_total"), snapshot.pop_empty);
        self.write_counter(
            &self.metric_name("replace_top_calls_total"),
            snapshot.replace_top_calls,
        );
        self.write_counter(
            &self.metric_name("push_pop_calls_total"),
            snapshot.push_pop_calls,
        );
        self.write_counter(&self.metric_name("heapify_calls_total"), snapshot.heapify_calls);
        self.write_counter(
            &self.metric_name("heapify_elements_total"),
            snapshot.heapify_elements,
        );
        self.write_counter(&self.metric_name("heapify_steps_total"), snapshot.heapify_steps);
        self.write_counter(&self.metric_name("sift_up_steps_total"), snapshot.sift_up_steps);
        self.write_counter(
            &self.metric_name("sift_down_steps_total"),
            snapshot.sift_down_steps,
        );
        self.write_counter(&self.metric_name("clear_calls_total"), snapshot.clear_calls);
        self.write_counter(&self.metric_name("top_calls_total"), snapshot.top_calls);
        self.write_counter(&self.metric_name("top_empty_total"), snapshot.top_empty);
        self.write_gauge(&self.metric_name("len"), snapshot.heap_len as u64);
        self.write_gauge(&self.metric_name("capacity"), snapshot.capacity as u64);
    }
}
