//! CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand};

/// aisctl - AI Streams CLI
#[derive(Parser, Debug)]
#[command(name = "aisctl")]
#[command(version)]
#[command(about = "Command-line front-end for the AI Streams platform")]
#[command(long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level command groups
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage resources on the Google managed service
    Managed {
        #[command(subcommand)]
        command: ManagedCommands,
    },
    /// Manage streams served from an on-premise cluster
    Onprem {
        #[command(subcommand)]
        command: OnpremCommands,
    },
    /// Ingest a video source into a stream
    Ingest(IngestArgs),
    /// Play back a stream whose packets are convertible to raw images
    Playback(PlaybackArgs),
    /// Print packets as text onto stdout
    Print(PrintArgs),
    /// Chunk an input video source into video files
    Chunk(ChunkArgs),
}

#[derive(Subcommand, Debug)]
pub enum ManagedCommands {
    /// Manage streams
    Stream {
        #[command(subcommand)]
        command: ManagedStreamCommands,
    },
    /// Manage clusters
    Cluster {
        #[command(subcommand)]
        command: ManagedClusterCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum OnpremCommands {
    /// Manage streams
    Stream {
        #[command(subcommand)]
        command: OnpremStreamCommands,
    },
}

/// Options shared by every managed-service command
#[derive(Args, Debug)]
pub struct ManagedContext {
    /// Address/domain name of the managed service API
    #[arg(long, default_value = "aistreams.googleapis.com")]
    pub service_address: String,

    /// GCP project id of the Google managed service
    #[arg(long, env = "AIS_PROJECT_ID")]
    pub project_id: String,
}

/// Options shared by every `managed stream` command
#[derive(Args, Debug)]
pub struct ManagedStreamContext {
    #[command(flatten)]
    pub managed: ManagedContext,

    /// The cluster name in the Google managed service
    #[arg(long)]
    pub cluster_name: String,

    /// The region of the Google managed service
    #[arg(long, default_value = "us-central1")]
    pub region: String,
}

#[derive(Subcommand, Debug)]
pub enum ManagedStreamCommands {
    /// Create a stream
    Create {
        #[command(flatten)]
        context: ManagedStreamContext,

        /// Stream name
        #[arg(short = 's', long)]
        stream_name: String,
    },
    /// Delete a stream
    Delete {
        #[command(flatten)]
        context: ManagedStreamContext,

        /// Stream name
        #[arg(short = 's', long)]
        stream_name: String,
    },
    /// List all streams
    List {
        #[command(flatten)]
        context: ManagedStreamContext,
    },
}

/// Cluster selection for `managed cluster create`/`delete`
#[derive(Args, Debug)]
pub struct ClusterSelector {
    /// Cluster name
    #[arg(long)]
    pub cluster_name: String,

    /// The region of the Google managed service
    #[arg(long, default_value = "us-central1")]
    pub region: String,
}

#[derive(Subcommand, Debug)]
pub enum ManagedClusterCommands {
    /// Create a cluster
    Create {
        #[command(flatten)]
        context: ManagedContext,

        #[command(flatten)]
        selector: ClusterSelector,
    },
    /// Delete a cluster
    Delete {
        #[command(flatten)]
        context: ManagedContext,

        #[command(flatten)]
        selector: ClusterSelector,
    },
    /// List all clusters
    List {
        #[command(flatten)]
        context: ManagedContext,
    },
}

/// Options shared by every `onprem stream` command
#[derive(Args, Debug)]
pub struct OnpremContext {
    /// Address (ip:port) of the ingress
    #[arg(short = 't', long, env = "AIS_TARGET_ADDRESS")]
    pub target_address: Option<String>,

    /// Path to the ssl certificate of the ingress
    #[arg(long)]
    pub ssl_root_cert_path: Option<String>,

    /// Expected ssl domain name of the ingress
    #[arg(long, default_value = "aistreams.googleapis.com")]
    pub ssl_domain_name: String,

    /// Use an insecure channel
    #[arg(short = 'u', long)]
    pub use_insecure_channel: bool,
}

#[derive(Subcommand, Debug)]
pub enum OnpremStreamCommands {
    /// Create a stream
    Create {
        #[command(flatten)]
        context: OnpremContext,

        /// Stream name
        #[arg(short = 's', long)]
        stream_name: String,

        /// Stream retention period in seconds
        #[arg(short = 'r', long, default_value_t = 86400)]
        stream_retention_seconds: i64,
    },
    /// Delete a stream
    Delete {
        #[command(flatten)]
        context: OnpremContext,

        /// Stream name
        #[arg(short = 's', long)]
        stream_name: String,
    },
    /// List all streams
    List {
        #[command(flatten)]
        context: OnpremContext,
    },
}

/// `ingest` - send a video source into a stream
#[derive(Args, Debug)]
pub struct IngestArgs {
    /// Address (ip:port) of the service endpoint
    #[arg(
        short = 't',
        long,
        env = "AIS_TARGET_ADDRESS",
        default_value = "localhost:50051"
    )]
    pub target_address: String,

    /// Path to the ssl certificate of the ingress
    #[arg(long)]
    pub ssl_root_cert_path: Option<String>,

    /// Expected ssl domain name of the ingress
    #[arg(long, default_value = "aistreams.googleapis.com")]
    pub ssl_domain_name: String,

    /// Pass this if and only if you are using the Google managed service
    #[arg(short = 'a', long)]
    pub authenticate_with_google: bool,

    /// Use an insecure channel
    #[arg(short = 'u', long)]
    pub use_insecure_channel: bool,

    /// The name of the stream to ingest into
    #[arg(short = 's', long)]
    pub stream_name: String,

    /// The uri of the input source; a bare path is treated as a local file
    #[arg(short = 'i', long)]
    pub source_uri: String,

    /// Replay the source in a loop
    #[arg(short = 'l', long = "loop")]
    pub loop_playback: bool,

    /// Probability that any single packet is traced
    #[arg(long, default_value_t = 0.0)]
    pub trace_probability: f64,
}

/// `playback` - render a stream on screen
#[derive(Args, Debug)]
pub struct PlaybackArgs {
    /// Address (ip:port) of the ingress
    #[arg(
        short = 't',
        long,
        env = "AIS_TARGET_ADDRESS",
        default_value = "localhost:50051"
    )]
    pub target_address: String,

    /// Pass this if and only if you are using the Google managed service
    #[arg(short = 'a', long)]
    pub authenticate_with_google: bool,

    /// Path to the ssl certificate of the ingress
    #[arg(long)]
    pub ssl_root_cert_path: Option<String>,

    /// Expected ssl domain name of the ingress
    #[arg(long, default_value = "aistreams.googleapis.com")]
    pub ssl_domain_name: String,

    /// Use an insecure channel
    #[arg(short = 'u', long)]
    pub use_insecure_channel: bool,

    /// The name of the stream to play from
    #[arg(short = 's', long)]
    pub stream_name: String,

    /// Also write the decoded video into this mp4 file
    #[arg(long)]
    pub output_mp4: Option<String>,

    /// The timeout (in seconds) for the server to yield a packet
    #[arg(long, default_value_t = 5)]
    pub receiver_timeout: i64,
}

/// `print` - dump stream packets as text
#[derive(Args, Debug)]
pub struct PrintArgs {
    /// Address (ip:port) of the ingress
    #[arg(
        short = 't',
        long,
        env = "AIS_TARGET_ADDRESS",
        default_value = "localhost:50051"
    )]
    pub target_address: String,

    /// Pass this if and only if you are using the Google managed service
    #[arg(short = 'a', long)]
    pub authenticate_with_google: bool,

    /// Path to the ssl certificate of the ingress
    #[arg(long)]
    pub ssl_root_cert_path: Option<String>,

    /// Expected ssl domain name of the ingress
    #[arg(long, default_value = "aistreams.googleapis.com")]
    pub ssl_domain_name: String,

    /// Use an insecure channel
    #[arg(short = 'u', long)]
    pub use_insecure_channel: bool,

    /// The name of the stream to print
    #[arg(short = 's', long)]
    pub stream_name: String,

    /// The timeout (in seconds) for the server to yield a packet
    #[arg(long, default_value_t = 15)]
    pub receiver_timeout: i64,
}

/// `chunk` - split an input video source into video files
#[derive(Args, Debug)]
pub struct ChunkArgs {
    #[command(flatten)]
    pub options: ChunkOptions,

    #[command(subcommand)]
    pub source: ChunkSource,
}

/// Chunking options, given before the source subcommand
#[derive(Args, Debug)]
pub struct ChunkOptions {
    /// The maximum number of video frames per output file
    #[arg(long, default_value_t = 200)]
    pub max_frames_per_file: i64,

    /// Local directory to save output files into; defaults to the current
    /// working directory
    #[arg(short = 'o', long, default_value = "")]
    pub output_dir: String,

    /// Optional prefix to attach to the output video files
    #[arg(long, default_value = "")]
    pub output_file_prefix: String,

    /// The GCS bucket to upload to; empty means no upload
    #[arg(long, default_value = "")]
    pub gcs_bucket_name: String,

    /// The subdirectory in the GCS bucket to upload into
    #[arg(long, default_value = "")]
    pub gcs_bucket_subdir_name: String,

    /// If uploading, keep a local copy of the videos
    #[arg(long)]
    pub upload_keep_local: bool,

    /// Size of the internal work buffers
    #[arg(long, default_value_t = 100)]
    pub working_buffer_size: i64,

    /// The timeout for internal workers to finalize their tasks
    #[arg(long, default_value_t = 5)]
    pub finalization_deadline_in_sec: i64,
}

/// Video input sources for `chunk`
#[derive(Subcommand, Debug)]
pub enum ChunkSource {
    /// Use an AI Streams stream as the video input source
    Stream(ChunkStreamArgs),
    /// Use a URI as the video input source
    Uri(ChunkUriArgs),
    /// Use a gstreamer pipeline as the video input source
    Gstreamer(ChunkGstreamerArgs),
}

#[derive(Args, Debug)]
pub struct ChunkStreamArgs {
    /// Address (ip:port) of the ingress
    #[arg(short = 't', long, env = "AIS_TARGET_ADDRESS")]
    pub target_address: String,

    /// Path to the ssl certificate of the ingress
    #[arg(short = 'c', long)]
    pub ssl_root_cert_path: Option<String>,

    /// Expected ssl domain name of the ingress
    #[arg(long, default_value = "aistreams.googleapis.com")]
    pub ssl_domain_name: String,

    /// Pass this if and only if you are using the Google managed service
    #[arg(short = 'a', long)]
    pub authenticate_with_google: bool,

    /// Use an insecure channel
    #[arg(short = 'u', long)]
    pub use_insecure_channel: bool,

    /// The name of the stream to chunk
    #[arg(short = 's', long)]
    pub stream_name: String,

    /// The timeout (in seconds) for the stream server to deliver a packet
    #[arg(long, default_value_t = 15)]
    pub receiver_timeout_in_sec: i64,
}

#[derive(Args, Debug)]
pub struct ChunkUriArgs {
    /// The uri of the input source; a bare path is treated as a local file
    #[arg(short = 'i', long)]
    pub source_uri: String,
}

#[derive(Args, Debug)]
pub struct ChunkGstreamerArgs {
    /// A gstreamer pipeline producing video/x-raw output; the produced raw
    /// images are used as the video source
    #[arg(short = 'i', long)]
    pub input_pipeline: String,
}
