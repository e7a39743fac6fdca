// BEGIN - Embark standard lints v0.4
// do not change or add/remove here, but one can add exceptions after this section
// for more info see: <https://github.com/EmbarkStudios/rust-ecosystem/issues/59>
#![deny(unsafe_code)]
#![warn(
    clippy::all,
    clippy::await_holding_lock,
    clippy::char_lit_as_u8,
    clippy::checked_conversions,
    clippy::dbg_macro,
    clippy::debug_assert_with_mut_call,
    clippy::doc_markdown,
    clippy::empty_enum,
    clippy::enum_glob_use,
    clippy::exit,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_deref_methods,
    clippy::explicit_into_iter_loop,
    clippy::fallible_impl_from,
    clippy::filter_map_next,
    clippy::float_cmp_const,
    clippy::fn_params_excessive_bools,
    clippy::if_let_mutex,
    clippy::implicit_clone,
    clippy::imprecise_flops,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::large_types_passed_by_value,
    clippy::let_unit_value,
    clippy::linkedlist,
    clippy::lossy_float_literal,
    clippy::macro_use_imports,
    clippy::manual_ok_or,
    clippy::map_err_ignore,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::match_on_vec_items,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mem_forget,
    clippy::mismatched_target_os,
    clippy::mut_mut,
    clippy::mutex_integer,
    clippy::needless_borrow,
    clippy::needless_continue,
    clippy::option_option,
    clippy::path_buf_push_overwrite,
    clippy::ptr_as_ptr,
    clippy::ref_option_ref,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::same_functions_in_if_condition,
    clippy::semicolon_if_nothing_returned,
    clippy::string_add_assign,
    clippy::string_add,
    clippy::string_lit_as_bytes,
    clippy::string_to_string,
    clippy::todo,
    clippy::trait_duplication_in_bounds,
    clippy::unimplemented,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::useless_transmute,
    clippy::verbose_file_reads,
    clippy::zero_sized_map_values,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms
)]
// END - Embark standard lints v0.4

use anyhow::Context as _;
use clap::Parser;
use std::process::ExitCode;

/// Regenerates the check sources in pkg/checks/ from config.yml
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {}

fn setup_logger(level: log::LevelFilter, color: bool) -> Result<(), fern::InitError> {
    use log::Level::{Debug, Error, Info, Trace, Warn};
    use nu_ansi_term::Color::{Blue, Green, Purple, Red, Yellow};

    fern::Dispatch::new()
        .level(level)
        .format(move |out, message, record| {
            let date = time::OffsetDateTime::now_utc()
                .format(time::macros::format_description!(
                    "[year]-[month]-[day] [hour]:[minute]:[second]"
                ))
                .unwrap_or_default();

            if color {
                out.finish(format_args!(
                    "{date} [{level}] {message}\x1B[0m",
                    level = match record.level() {
                        Error => Red.paint("ERROR"),
                        Warn => Yellow.paint("WARN"),
                        Info => Green.paint("INFO"),
                        Debug => Blue.paint("DEBUG"),
                        Trace => Purple.paint("TRACE"),
                    },
                ));
            } else {
                out.finish(format_args!("{date} [{}] {message}", record.level()));
            }
        })
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}

fn real_main() -> Result<(), anyhow::Error> {
    let Cli {} = Cli::parse();

    let color = std::io::IsTerminal::is_terminal(&std::io::stderr());
    setup_logger(log::LevelFilter::Info, color).context("failed to install logger")?;

    let summary = checkgen::run(&checkgen::Layout::default()).map_err(|err| {
        let stage = err.stage();
        match err.check_name() {
            Some(name) => log::error!("stage '{stage}' failed for check '{name}'"),
            None => log::error!("stage '{stage}' failed"),
        }
        anyhow::Error::from(err)
    })?;

    log::info!(
        "generated {} check(s), removed {} stale file(s)",
        summary.generated.len(),
        summary.removed
    );

    Ok(())
}

fn main() -> ExitCode {
    match real_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
