use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};

use serde::{Deserialize, Deserializer, de};
use url::Url;

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct HttpConfig
{
	/// The address the HTTP server is supposed to listen on.
	#[serde(default = "default_listen_on")]
	pub listen_on: SocketAddr,

	/// Origins (e.g. wherever the dashboard is hosted) allowed to make cross-origin requests.
	#[serde(default = "default_allowed_origins", deserialize_with = "deserialize_allowed_origins")]
	pub allowed_origins: Box<[http::HeaderValue]>,
}

impl HttpConfig
{
	pub fn allowed_origins(&self) -> impl Iterator<Item = http::HeaderValue>
	{
		self.allowed_origins.iter().cloned()
	}
}

impl Default for HttpConfig
{
	fn default() -> Self
	{
		Self {
			listen_on: default_listen_on(),
			allowed_origins: default_allowed_origins(),
		}
	}
}

fn default_listen_on() -> SocketAddr
{
	SocketAddr::from((Ipv4Addr::LOCALHOST, 5000))
}

fn default_allowed_origins() -> Box<[http::HeaderValue]>
{
	Box::from([
		http::HeaderValue::from_static("http://localhost:3000"),
		http::HeaderValue::from_static("http://localhost:5173"),
	])
}

fn deserialize_allowed_origins<'de, D>(
	deserializer: D,
) -> Result<Box<[http::HeaderValue]>, D::Error>
where
	D: Deserializer<'de>,
{
	struct HeaderListVisitor;

	impl<'de> de::Visitor<'de> for HeaderListVisitor
	{
		type Value = Box<[http::HeaderValue]>;

		fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
		{
			fmt.write_str("a list of CORS origins")
		}

		fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
		where
			A: de::SeqAccess<'de>,
		{
			let size_hint = seq.size_hint().unwrap_or_default();
			let mut header_values = Vec::with_capacity(size_hint);

			while let Some(origin) = seq.next_element::<Url>()? {
				// `Url` always serializes with a trailing slash; `Origin` headers never have one.
				let origin = origin.as_str().trim_end_matches('/');

				match http::HeaderValue::from_str(origin) {
					Ok(header_value) => header_values.push(header_value),
					Err(err) => {
						return Err(de::Error::custom(format_args!("invalid CORS origin: {err}")));
					},
				}
			}

			Ok(header_values.into_boxed_slice())
		}
	}

	deserializer.deserialize_seq(HeaderListVisitor)
}
