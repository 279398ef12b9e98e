// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use std::time::Duration;

use super::consts::*;
use super::credentials::ConfigFile;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub api: ApiOptions,
    /// Endpoint fields typed on the command line. They beat the config file.
    pub api_cli: ApiOverrides,
    pub rate: RateOptions,
    pub export: ExportOptions,
    pub config_path: PathBuf,
    pub spec_paths: Vec<PathBuf>,
    /// Print URL + minified spec per file, no network.
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            api: ApiOptions::default(),
            api_cli: ApiOverrides::default(),
            rate: RateOptions::default(),
            export: ExportOptions::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            spec_paths: Vec::new(),
            dry_run: false,
        }
    }
}

/// Endpoint + fixed query fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOptions {
    pub base_url: String,
    pub api_version: String,
    pub currency: String,
    pub optimize_for: String,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            api_version: s!(API_VERSION),
            currency: s!(CURRENCY),
            optimize_for: s!(OPTIMIZE_FOR),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiOverrides {
    pub base_url: Option<String>,
    pub api_version: Option<String>,
}

impl ApiOptions {
    /// Precedence: command line, then config file, then built-in default.
    pub fn apply(&mut self, cli: &ApiOverrides, file: &ConfigFile) {
        if let Some(v) = cli.api_version.as_ref().or(file.api_version.as_ref()) {
            self.api_version = v.clone();
        }
        if let Some(b) = cli.base_url.as_ref().or(file.base_url.as_ref()) {
            self.base_url = b.clone();
        }
    }

    /// `<base>/<version>/<account>/reachestimate`
    pub fn endpoint_url(&self, account_id: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/{}/{account_id}/{ENDPOINT}", self.api_version)
    }
}

/// Token-bucket parameters: `requests` calls per `window`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateOptions {
    pub requests: u32,
    pub window: Duration,
}

impl Default for RateOptions {
    fn default() -> Self {
        Self {
            requests: REQUESTS_PER_WINDOW,
            window: Duration::from_secs(WINDOW_SECS),
        }
    }
}

impl RateOptions {
    /// Parse `N/SECS` (e.g. `1/5`, `3/10.5`) or a bare `SECS` meaning one call per SECS.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (n, secs) = match s.split_once('/') {
            Some((n, secs)) => (n.trim().parse::<u32>().ok()?, secs.trim()),
            None => (1, s),
        };
        let secs: f64 = secs.parse().ok()?;
        if n == 0 || !secs.is_finite() || secs < 0.0 { return None; }
        let window = Duration::try_from_secs_f64(secs).ok()?;
        Some(Self { requests: n, window })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator; JSON has none.
    pub fn delimiter(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// None → table goes to stdout only.
    out_path: Option<OutputPath>,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: None,
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn is_enabled(&self) -> bool { self.out_path.is_some() }

    /// Final file path. A user-typed extension wins over the format's.
    pub fn out_path(&self) -> Option<PathBuf> {
        let out = self.out_path.as_ref()?;
        let mut path = out.dir.clone();
        let stem = out.file_stem.to_string_lossy();
        let ext = match &out.ext {
            Some(e) => e.to_string_lossy().into_owned(),
            None => s!(self.format.ext()),
        };
        path.push(join!(&*stem, ".", &ext));
        Some(path)
    }

    /// Parse user text into dir + stem (+ ext). A trailing separator means
    /// "directory", and the default file name is used inside it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = None;
            return;
        }
        if s.ends_with('/') || s.ends_with('\\') {
            self.out_path = Some(OutputPath {
                dir: PathBuf::from(s),
                ..OutputPath::default()
            });
            return;
        }

        let p = Path::new(s);
        let mut out = OutputPath::default();
        out.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            out.file_stem = stem.to_os_string();
        }
        out.ext = p.extension().map(|e| e.to_os_string());
        self.out_path = Some(out);
    }

    /// Format implied by the typed extension, if it is one we know.
    pub fn format_from_path(&self) -> Option<ExportFormat> {
        let ext = self.out_path.as_ref()?.ext.as_ref()?;
        ExportFormat::from_name(&ext.to_string_lossy())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
