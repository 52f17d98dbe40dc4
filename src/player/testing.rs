// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.


//! Recording engine for tests.

use anyhow::Result;

use crate::player::{PlaybackEngine, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum EngineCall {
    SetSource(String),
    Play(RequestId),
    Pause,
    Seek(f64),
    SetVolume(f64),
}

#[derive(Default)]
pub(crate) struct FakeEngine {
    pub(crate) calls: Vec<EngineCall>,
}

impl FakeEngine {
    /// Id of the most recent play request.
    pub(crate) fn last_request(&self) -> Option<RequestId> {
        self.calls.iter().rev().find_map(|call| match call {
            EngineCall::Play(request) => Some(*request),
            _ => None,
        })
    }
}

impl PlaybackEngine for FakeEngine {
    fn set_source(&mut self, url: &str) -> Result<()> {
        self.calls.push(EngineCall::SetSource(url.to_string()));
        Ok(())
    }

    fn play(&mut self, request: RequestId) -> Result<()> {
        self.calls.push(EngineCall::Play(request));
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.calls.push(EngineCall::Pause);
        Ok(())
    }

    fn seek(&mut self, position: f64) -> Result<()> {
        self.calls.push(EngineCall::Seek(position));
        Ok(())
    }

    fn set_volume(&mut self, volume: f64) -> Result<()> {
        self.calls.push(EngineCall::SetVolume(volume));
        Ok(())
    }
}
