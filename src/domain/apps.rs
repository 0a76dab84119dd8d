//! Native application identities

/// The separately-built native applications the CLI can dispatch to.
///
/// Each app lives in the aisctl install directory under a fixed file name
/// and does the actual streaming work; this layer only launches them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeApp {
    Manager,
    Ingester,
    Chunker,
    Playback,
    Printer,
}

impl NativeApp {
    /// File name of the app binary inside the install directory.
    pub const fn file_name(&self) -> &'static str {
        match self {
            NativeApp::Manager => "manager_app",
            NativeApp::Ingester => "ingester_app",
            NativeApp::Chunker => "chunker_app",
            NativeApp::Playback => "playback_app",
            NativeApp::Printer => "printer_app",
        }
    }
}

/// Management operations understood by the manager app, passed to it as
/// the `--op_id` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerOp {
    CreateStream,
    ListStreams,
    DeleteStream,
    CreateCluster,
    ListClusters,
    DeleteCluster,
}

impl ManagerOp {
    /// The integer encoding the manager app expects.
    pub const fn op_id(&self) -> i64 {
        match self {
            ManagerOp::CreateStream => 0,
            ManagerOp::ListStreams => 1,
            ManagerOp::DeleteStream => 2,
            ManagerOp::CreateCluster => 3,
            ManagerOp::ListClusters => 4,
            ManagerOp::DeleteCluster => 5,
        }
    }
}
