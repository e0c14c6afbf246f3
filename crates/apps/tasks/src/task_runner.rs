use app_state::AppSettings;
use color_eyre::Result;
use common_services::aws::load_aws_config;
use common_services::collection::{bulk_index, ensure_collection, list_faces};
use common_services::face_index::{FaceIndex, IndexedFace, RekognitionFaceIndex};
use common_services::object_store::{ObjectStore, S3ObjectStore};
use std::io::Write;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    BulkIndex,
    ListFaces { max_results: i32 },
    EnsureCollection,
}

/// Runs `task` against the AWS services named in `settings`.
pub async fn run_task(settings: &AppSettings, task: Task, out: &mut impl Write) -> Result<()> {
    let sdk_config = load_aws_config(settings.aws.region.as_deref()).await;
    let face_index = RekognitionFaceIndex::new(&sdk_config, &settings.aws.bucket_name);
    let object_store = S3ObjectStore::new(&sdk_config, &settings.aws.bucket_name);

    run_task_with(&face_index, &object_store, &settings.aws.collection_id, task, out).await
}

pub async fn run_task_with(
    face_index: &dyn FaceIndex,
    object_store: &dyn ObjectStore,
    collection_id: &str,
    task: Task,
    out: &mut impl Write,
) -> Result<()> {
    info!("Running {task:?} on collection '{collection_id}'");
    match task {
        Task::BulkIndex => {
            let summary = bulk_index(face_index, object_store, collection_id).await?;
            writeln!(
                out,
                "Indexed {} images, {} without a detectable face.",
                summary.indexed, summary.without_face
            )?;
        }
        Task::ListFaces { max_results } => {
            let faces = list_faces(face_index, collection_id, max_results).await?;
            write_faces(out, collection_id, &faces)?;
        }
        Task::EnsureCollection => {
            let status = ensure_collection(face_index, collection_id).await?;
            writeln!(out, "Collection '{collection_id}': {status:?}")?;
        }
    }
    Ok(())
}

fn write_faces(
    out: &mut impl Write,
    collection_id: &str,
    faces: &[IndexedFace],
) -> Result<()> {
    if faces.is_empty() {
        writeln!(out, "No faces found in collection '{collection_id}'.")?;
        return Ok(());
    }

    writeln!(out, "Found {} faces:", faces.len())?;
    for face in faces {
        writeln!(out, "  - Face ID: {}", face.face_id)?;
        writeln!(
            out,
            "    Image ID (Filename): {}",
            face.external_image_id.as_deref().unwrap_or("<none>")
        )?;
        writeln!(out, "---")?;
    }
    Ok(())
}
