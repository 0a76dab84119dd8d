//! Per-command invocation builders
//!
//! One pure function per leaf command, mapping validated CLI arguments to
//! the ordered flag configuration of the target native app. Flag names and
//! ordering follow the app-side flag tables, which differ from the
//! user-facing spellings (`--service-address` becomes `--target_address`,
//! `--region` becomes `--location`, and so on).

use crate::cli::args::{
    ChunkOptions, ChunkSource, ClusterSelector, IngestArgs, ManagedContext, ManagedStreamContext,
    OnpremContext, PlaybackArgs, PrintArgs,
};
use crate::domain::{Invocation, ManagerOp, NativeApp};

/// Manager app invocation for streams in managed clusters.
pub fn managed_stream(
    op: ManagerOp,
    context: &ManagedStreamContext,
    stream_name: Option<&str>,
) -> Invocation {
    let mut invocation = Invocation::new(NativeApp::Manager)
        .flag("op_id", op.op_id())
        .flag("target_address", &context.managed.service_address)
        .flag("project", &context.managed.project_id)
        .flag("cluster_name", &context.cluster_name)
        .flag("location", &context.region)
        .flag("use_google_managed_service", true);
    if let Some(stream_name) = stream_name {
        invocation = invocation.flag("stream_name", stream_name);
    }
    invocation
}

/// Manager app invocation for clusters in the managed service.
pub fn managed_cluster(
    op: ManagerOp,
    context: &ManagedContext,
    selector: Option<&ClusterSelector>,
) -> Invocation {
    let mut invocation = Invocation::new(NativeApp::Manager)
        .flag("op_id", op.op_id())
        .flag("target_address", &context.service_address)
        .flag("project", &context.project_id)
        .flag("use_google_managed_service", true);
    if let Some(selector) = selector {
        invocation = invocation
            .flag("cluster_name", &selector.cluster_name)
            .flag("location", &selector.region);
    }
    invocation
}

/// Manager app invocation for streams on an on-premise cluster.
pub fn onprem_stream(
    op: ManagerOp,
    context: &OnpremContext,
    stream_name: Option<&str>,
    retention_seconds: Option<i64>,
) -> Invocation {
    let mut invocation = Invocation::new(NativeApp::Manager)
        .flag("op_id", op.op_id())
        .flag("ssl_domain_name", &context.ssl_domain_name)
        .flag("ssl_root_cert_path", &context.ssl_root_cert_path)
        .flag("target_address", &context.target_address)
        .flag("use_google_managed_service", false)
        .flag("use_insecure_channel", context.use_insecure_channel);
    if let Some(stream_name) = stream_name {
        invocation = invocation.flag("stream_name", stream_name);
    }
    if let Some(seconds) = retention_seconds {
        invocation = invocation.flag("stream_retention_seconds", seconds);
    }
    invocation
}

pub fn ingest(args: &IngestArgs) -> Invocation {
    Invocation::new(NativeApp::Ingester)
        .flag("target_address", &args.target_address)
        .flag("authenticate_with_google", args.authenticate_with_google)
        .flag("ssl_root_cert_path", &args.ssl_root_cert_path)
        .flag("ssl_domain_name", &args.ssl_domain_name)
        .flag("stream_name", &args.stream_name)
        .flag("source_uri", &args.source_uri)
        .flag("loop", args.loop_playback)
        .flag("trace_probability", args.trace_probability)
        .flag("use_insecure_channel", args.use_insecure_channel)
}

pub fn playback(args: &PlaybackArgs) -> Invocation {
    Invocation::new(NativeApp::Playback)
        .flag("target_address", &args.target_address)
        .flag("authenticate_with_google", args.authenticate_with_google)
        .flag("ssl_root_cert_path", &args.ssl_root_cert_path)
        .flag("ssl_domain_name", &args.ssl_domain_name)
        .flag("stream_name", &args.stream_name)
        .flag("timeout_in_sec", args.receiver_timeout)
        .flag("output_mp4", &args.output_mp4)
        .flag("use_insecure_channel", args.use_insecure_channel)
}

pub fn print(args: &PrintArgs) -> Invocation {
    Invocation::new(NativeApp::Printer)
        .flag("target_address", &args.target_address)
        .flag("authenticate_with_google", args.authenticate_with_google)
        .flag("ssl_root_cert_path", &args.ssl_root_cert_path)
        .flag("ssl_domain_name", &args.ssl_domain_name)
        .flag("stream_name", &args.stream_name)
        .flag("timeout_in_sec", args.receiver_timeout)
        .flag("use_insecure_channel", args.use_insecure_channel)
}

/// Chunker app invocation. `use_uri_source` and `upload_to_gcs` are
/// derived rather than user-supplied: the former from the selected source
/// subcommand, the latter from whether a GCS bucket was named.
pub fn chunk(options: &ChunkOptions, source: &ChunkSource) -> Invocation {
    let use_uri_source = matches!(source, ChunkSource::Uri(_));
    let invocation = Invocation::new(NativeApp::Chunker)
        .flag("max_frames_per_file", options.max_frames_per_file)
        .flag("output_dir", &options.output_dir)
        .flag("file_prefix", &options.output_file_prefix)
        .flag("upload_to_gcs", !options.gcs_bucket_name.is_empty())
        .flag("gcs_bucket_name", &options.gcs_bucket_name)
        .flag("gcs_object_dir", &options.gcs_bucket_subdir_name)
        .flag("keep_local", options.upload_keep_local)
        .flag("use_uri_source", use_uri_source)
        .flag("working_buffer_size", options.working_buffer_size)
        .flag(
            "finalization_deadline_in_sec",
            options.finalization_deadline_in_sec,
        );

    match source {
        ChunkSource::Uri(uri) => invocation.flag("source_uri", &uri.source_uri),
        ChunkSource::Gstreamer(gstreamer) => invocation
            .flag("use_gstreamer_input_source", true)
            .flag("gstreamer_input_pipeline", &gstreamer.input_pipeline),
        ChunkSource::Stream(stream) => invocation
            .flag("receiver_timeout_in_sec", stream.receiver_timeout_in_sec)
            .flag("authenticate_with_google", stream.authenticate_with_google)
            .flag("use_insecure_channel", stream.use_insecure_channel)
            .flag("target_address", &stream.target_address)
            .flag("ssl_domain_name", &stream.ssl_domain_name)
            .flag("ssl_root_cert_path", &stream.ssl_root_cert_path)
            .flag("stream_name", &stream.stream_name),
    }
}
