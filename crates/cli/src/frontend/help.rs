/// Deterministic help text describing the supported options.
const HELP_TEXT: &str = concat!(
    "shastep ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "Step through SHA-256 one observable sub-step at a time.\n",
    "\n",
    "Usage: shastep [OPTIONS] [MESSAGE]\n",
    "\n",
    "Every 512-bit block runs through 125 clock positions: padding (5),\n",
    "chunking (1), schedule (48), initialization (3), compression (64)\n",
    "and digest (4). Clock 0 is the first padding step of block 0.\n",
    "\n",
    "Options:\n",
    "  -b, --base BASE     Input base of MESSAGE: text, binary or hex.\n",
    "  -c, --clock CLOCK   Clock position to inspect (clamped into range).\n",
    "  -e, --end           Inspect the terminal clock position.\n",
    "      --phase PHASE   Start at the first sub-step of PHASE.\n",
    "      --block N       Block index used with --phase (default 0).\n",
    "      --play          Print every position from the start through the digest.\n",
    "      --interval MS   Delay between playback frames in milliseconds.\n",
    "      --format FORMAT Output format: text or json.\n",
    "      --convert BASE  Print MESSAGE re-encoded in BASE and exit.\n",
    "      --last-clock    Print the terminal clock position and exit.\n",
    "  -v, --verbose       Increase diagnostic verbosity (repeatable).\n",
    "      --info FLAGS    Informational diagnostics: input, digest, progress.\n",
    "      --debug FLAGS   Debug diagnostics: padding, schedule, compress, clock.\n",
    "  -h, --help          Show this help message and exit.\n",
    "  -V, --version       Output version information and exit.\n",
    "\n",
    "Environment:\n",
    "  SHASTEP_BASE         Default for --base.\n",
    "  SHASTEP_INTERVAL_MS  Default for --interval.\n",
    "  SHASTEP_LOG          Extra tracing filter directives applied before --info/--debug.\n",
);

/// Renders the help text.
pub(crate) fn render_help() -> String {
    HELP_TEXT.to_string()
}

/// Renders the version banner.
pub(crate) fn render_version() -> String {
    format!("shastep {}\n", env!("CARGO_PKG_VERSION"))
}
