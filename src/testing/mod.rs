//! Helpers shared by tests.

use std::collections::BTreeMap;
use std::iter;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{self, AtomicBool};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use tokio::net::TcpListener;
use tower::ServiceExt;
use url::Url;

use crate::database::{StoreError, StoreResult};
use crate::services::StudentService;
use crate::students::{NewStudent, Student, StudentId, StudentStore};

/// An in-memory [`StudentStore`].
///
/// IDs are assigned sequentially starting at 1 and never reused, like `AUTO_INCREMENT`.
/// While marked unavailable, every operation fails the way a lost database connection would.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryStore
{
	state: Arc<Mutex<State>>,
	unavailable: Arc<AtomicBool>,
	list_unavailable: Arc<AtomicBool>,
}

#[derive(Debug, Default)]
struct State
{
	last_id: u32,
	students: BTreeMap<StudentId, Student>,
}

impl MemoryStore
{
	pub(crate) fn set_unavailable(&self, unavailable: bool)
	{
		self.unavailable.store(unavailable, atomic::Ordering::SeqCst);
	}

	/// Makes only [`StudentStore::list()`] fail.
	pub(crate) fn set_list_unavailable(&self, unavailable: bool)
	{
		self.list_unavailable.store(unavailable, atomic::Ordering::SeqCst);
	}

	fn state(&self) -> StoreResult<MutexGuard<'_, State>>
	{
		if self.unavailable.load(atomic::Ordering::SeqCst) {
			return Err(connection_refused());
		}

		Ok(self.state.lock().unwrap_or_else(PoisonError::into_inner))
	}
}

impl StudentStore for MemoryStore
{
	async fn list(&self) -> StoreResult<Vec<Student>>
	{
		if self.list_unavailable.load(atomic::Ordering::SeqCst) {
			return Err(connection_refused());
		}

		Ok(self.state()?.students.values().cloned().collect())
	}

	async fn insert(&self, student: NewStudent) -> StoreResult<StudentId>
	{
		let mut state = self.state()?;
		state.last_id += 1;

		let id = StudentId::from(state.last_id);
		let NewStudent { name, course, year } = student;

		state.students.insert(id, Student { id, name, course, year });

		Ok(id)
	}

	async fn delete(&self, id: StudentId) -> StoreResult<u64>
	{
		Ok(self.state()?.students.remove(&id).map_or(0, |_| 1))
	}
}

fn connection_refused() -> StoreError
{
	StoreError::from(sqlx::Error::Protocol(String::from("connection refused")))
}

pub(crate) fn new_student(name: &str, course: &str, year: i32) -> NewStudent
{
	NewStudent { name: String::from(name), course: String::from(course), year }
}

/// Builds the full application router on top of `store`.
pub(crate) fn router<S>(store: S) -> Router
where
	S: StudentStore,
{
	crate::http::router(StudentService::new(store), iter::empty::<http::HeaderValue>())
}

/// Sends a single request through `router` and returns the status and JSON body.
///
/// An empty body is returned as `null`.
pub(crate) async fn send(
	router: Router,
	request: Request<Body>,
) -> color_eyre::Result<(StatusCode, serde_json::Value)>
{
	let response = router.oneshot(request).await?;
	let status = response.status();
	let body = response.into_body().collect().await?.to_bytes();
	let json = if body.is_empty() { serde_json::Value::Null } else { serde_json::from_slice(&body)? };

	Ok((status, json))
}

/// Serves the application on an ephemeral local port and returns its base URL.
pub(crate) async fn spawn_server<S>(store: S) -> color_eyre::Result<Url>
where
	S: StudentStore,
{
	let listener = TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0))).await?;
	let addr = listener.local_addr()?;
	let router = router(store);

	tokio::spawn(async move { axum::serve(listener, router).await });

	Ok(format!("http://{addr}").parse()?)
}
