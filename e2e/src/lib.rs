// Copyright 2026 SRE Demo Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use sre_demo::state::AppState;

/// Boots the backend on an ephemeral local port.
///
/// Returns the base URL and a handle on the shared state so tests can
/// toggle chaos without racing the HTTP surface.
pub async fn spawn_backend() -> anyhow::Result<(String, AppState)> {
    let state = AppState::with_demo_credentials();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let serve_state = state.clone();
    tokio::spawn(async move {
        if let Err(err) = sre_demo::server::serve(listener, serve_state).await {
            eprintln!("backend exited: {err}");
        }
    });

    Ok((format!("http://{addr}"), state))
}
