// Copyright 2015-2024 Swim Inc.
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

use crate::checks::CheckFuture;
use crate::error::CheckError;
use futures::future::{self, BoxFuture};
use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};


/// Strategy deciding how the futures of simultaneously applied checks are
/// driven to completion. A validator runs every batch of concurrent checks,
/// both the top level batch and the batches produced by composite checks,
/// through its strategy.
pub trait JoinStrategy: Send + Sync {
    /// Run all of `checks`, succeeding when every one of them succeeds and
    /// failing with the error of a failed check otherwise.
    fn try_join_all<'a>(
        &'a self,
        checks: Vec<CheckFuture<'a>>,
    ) -> BoxFuture<'a, Result<(), CheckError>>;

    /// Run all of `checks` to completion, regardless of failures, and return
    /// every result.
    fn join_all<'a>(
        &'a self,
        checks: Vec<CheckFuture<'a>>,
    ) -> BoxFuture<'a, Vec<Result<(), CheckError>>>;
}

/// Joins check futures in the order they were given. When several checks fail
/// in the same poll, the failure of the first of them is the one reported,
/// making the outcome of a batch deterministic. A failure is reported
/// immediately, even when checks earlier in the batch have not settled.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrderedJoin;

impl JoinStrategy for OrderedJoin {
    fn try_join_all<'a>(
        &'a self,
        checks: Vec<CheckFuture<'a>>,
    ) -> BoxFuture<'a, Result<(), CheckError>> {
        TryJoinInOrder {
            checks: checks.into_iter().map(Some).collect(),
        }
        .boxed()
    }

    fn join_all<'a>(
        &'a self,
        checks: Vec<CheckFuture<'a>>,
    ) -> BoxFuture<'a, Vec<Result<(), CheckError>>> {
        future::join_all(checks).boxed()
    }
}

/// The future behind [`OrderedJoin::try_join_all`]. Polls every undecided
/// check in the order the checks were given and settles as soon as one of
/// them fails, without waiting for the checks before it.
struct TryJoinInOrder<'a> {
    checks: Vec<Option<CheckFuture<'a>>>,
}

impl<'a> Future for TryJoinInOrder<'a> {
    type Output = Result<(), CheckError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let TryJoinInOrder { checks } = self.as_mut().get_mut();
        let mut undecided = false;
        for slot in checks.iter_mut() {
            if let Some(check) = slot {
                match check.poll_unpin(cx) {
                    Poll::Ready(Ok(())) => *slot = None,
                    Poll::Ready(Err(error)) => return Poll::Ready(Err(error)),
                    Poll::Pending => undecided = true,
                }
            }
        }
        if undecided {
            Poll::Pending
        } else {
            Poll::Ready(Ok(()))
        }
    }
}

/// Joins check futures in the order they complete. A failure is reported as
/// soon as it occurs, which keeps latency low but makes the reported failure
/// of a batch with several failing checks timing dependent.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnorderedJoin;

impl JoinStrategy for UnorderedJoin {
    fn try_join_all<'a>(
        &'a self,
        checks: Vec<CheckFuture<'a>>,
    ) -> BoxFuture<'a, Result<(), CheckError>> {
        let mut remaining: FuturesUnordered<_> = checks.into_iter().collect();
        async move {
            while let Some(result) = remaining.next().await {
                result?;
            }
            Ok(())
        }
        .boxed()
    }

    fn join_all<'a>(
        &'a self,
        checks: Vec<CheckFuture<'a>>,
    ) -> BoxFuture<'a, Vec<Result<(), CheckError>>> {
        let remaining: FuturesUnordered<_> = checks.into_iter().collect();
        remaining.collect().boxed()
    }
}
