//! 单次执行命令
//!
//! 把一次 API 调用包装为可延迟执行的命令，调用方自行选择同步等待
//! 或异步派发；无论多少调用并发竞争同一条命令，被包装的操作至多执行一次

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use futures::future::BoxFuture;
use tokio_util::sync::CancellationToken;

use crate::error::{DeeplError, DeeplResult};

/// 单次执行命令
///
/// 持有一个取消上下文和一个延迟执行的操作。执行权通过 closed 标记的
/// 原子 test-and-set 抢占：竞争的调用中恰好一个执行操作，其余立即得到
/// [`DeeplError::CommandClosed`]，不会被执行者阻塞。
///
/// 命令自身不做重试、不做超时，也不观察上下文是否过期；
/// 上下文原样透传，是否响应取消由被包装的操作负责。
pub struct Command<T> {
    ctx: CancellationToken,
    closed: AtomicBool,
    op: Mutex<Option<BoxFuture<'static, DeeplResult<T>>>>,
}

impl<T: Send + 'static> Command<T> {
    /// 用取消上下文和被包装的操作创建命令
    pub fn new<F>(ctx: CancellationToken, op: F) -> Self
    where
        F: Future<Output = DeeplResult<T>> + Send + 'static,
    {
        Self {
            ctx,
            closed: AtomicBool::new(false),
            op: Mutex::new(Some(Box::pin(op))),
        }
    }

    /// 执行权是否已被领取（开始执行或已执行完毕）
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// 命令绑定的取消上下文
    pub fn context(&self) -> &CancellationToken {
        &self.ctx
    }

    // 原子抢占执行权并取出操作，竞争失败返回 None。
    // swap 失败的一方不会触碰锁，所以不会被执行者在途的工作阻塞。
    fn claim(&self) -> Option<BoxFuture<'static, DeeplResult<T>>> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return None;
        }
        let mut op = match self.op.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        op.take()
    }

    /// 同步执行：在当前任务上等待操作完成并返回其结果
    ///
    /// 命令已关闭时直接返回 [`DeeplError::CommandClosed`]，不会再次执行操作
    pub async fn sync(&self) -> DeeplResult<T> {
        match self.claim() {
            Some(op) => op.await,
            None => Err(DeeplError::CommandClosed),
        }
    }

    /// 异步执行：把操作派发到独立任务，完成后带原上下文回调 `handler`
    ///
    /// 命令已关闭时 `handler` 在当前线程立即收到
    /// [`DeeplError::CommandClosed`]；否则本方法立刻返回，`handler`
    /// 在操作所在的任务上执行，不会在返回之前被调用
    pub fn spawn<F>(&self, handler: F)
    where
        F: FnOnce(CancellationToken, DeeplResult<T>) + Send + 'static,
    {
        let ctx = self.ctx.clone();
        match self.claim() {
            Some(op) => {
                tokio::spawn(async move {
                    let result = op.await;
                    handler(ctx, result);
                });
            }
            None => handler(ctx, Err(DeeplError::CommandClosed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;

    fn new_command<T, F>(op: F) -> Command<T>
    where
        T: Send + 'static,
        F: Future<Output = DeeplResult<T>> + Send + 'static,
    {
        Command::new(CancellationToken::new(), op)
    }

    #[test]
    fn test_new_command_is_not_closed() {
        let cmd = new_command(async { Ok(0) });
        assert!(!cmd.is_closed());
    }

    #[tokio::test]
    async fn test_sync_returns_operation_result() {
        let cmd = new_command(async { Ok(1) });
        assert_eq!(cmd.sync().await.unwrap(), 1);
        assert!(cmd.is_closed());
    }

    #[tokio::test]
    async fn test_sync_twice_runs_operation_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let cmd = new_command(async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(42)
        });

        assert_eq!(cmd.sync().await.unwrap(), 42);
        assert!(matches!(
            cmd.sync().await,
            Err(DeeplError::CommandClosed)
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_spawn_after_sync_gets_closed_immediately() {
        let cmd = new_command(async { Ok(7) });
        cmd.sync().await.unwrap();

        let (tx, rx) = tokio::sync::oneshot::channel();
        cmd.spawn(move |_ctx, result| {
            tx.send(result).ok();
        });
        assert!(matches!(
            rx.await.unwrap(),
            Err(DeeplError::CommandClosed)
        ));
    }

    #[tokio::test]
    async fn test_sync_after_spawn_gets_closed_without_blocking() {
        // 操作挂起直到收到信号，后来的 sync 不应等它
        let (release_tx, release_rx) = tokio::sync::oneshot::channel::<()>();
        let cmd = new_command(async move {
            release_rx.await.ok();
            Ok(9)
        });

        let (done_tx, done_rx) = tokio::sync::oneshot::channel();
        cmd.spawn(move |_ctx, result| {
            done_tx.send(result).ok();
        });

        // 执行权已被领取，操作尚未完成
        assert!(cmd.is_closed());
        assert!(matches!(
            cmd.sync().await,
            Err(DeeplError::CommandClosed)
        ));

        release_tx.send(()).unwrap();
        assert_eq!(done_rx.await.unwrap().unwrap(), 9);
    }

    #[tokio::test]
    async fn test_spawn_callback_runs_after_spawn_returns() {
        let marker = Arc::new(AtomicBool::new(false));
        let observed = marker.clone();

        let cmd = new_command(async { Ok(5) });
        let (tx, rx) = tokio::sync::oneshot::channel();
        cmd.spawn(move |_ctx, result| {
            tx.send((observed.load(Ordering::SeqCst), result)).ok();
        });
        // 当前线程运行时：回调只能在让出执行权之后运行，
        // spawn 返回后设置的标记必须对回调可见
        marker.store(true, Ordering::SeqCst);

        let (saw_marker, result) = rx.await.unwrap();
        assert!(saw_marker, "回调不能在 spawn 返回之前执行");
        assert_eq!(result.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_spawn_callback_receives_operation_error() {
        let cmd: Command<i32> = new_command(async { Err(DeeplError::Internal) });
        let (tx, rx) = tokio::sync::oneshot::channel();
        cmd.spawn(move |_ctx, result| {
            tx.send(result).ok();
        });

        // 操作自身的错误原样透传，不会被改写成 CommandClosed
        assert!(matches!(rx.await.unwrap(), Err(DeeplError::Internal)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_racing_callers_execute_exactly_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let cmd = Arc::new(new_command(async move {
            counter.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok(1)
        }));

        let mut handles = Vec::new();
        for _ in 0..16 {
            let cmd = cmd.clone();
            handles.push(tokio::spawn(async move { cmd.sync().await }));
        }

        let mut winners = 0;
        let mut losers = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(value) => {
                    assert_eq!(value, 1);
                    winners += 1;
                }
                Err(DeeplError::CommandClosed) => losers += 1,
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }

        assert_eq!(winners, 1, "恰好一个调用执行操作");
        assert_eq!(losers, 15);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_mixed_sync_and_spawn_race() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let cmd = Arc::new(new_command(async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(3)
        }));

        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let mut handles = Vec::new();
        for i in 0..8 {
            let cmd = cmd.clone();
            let tx = tx.clone();
            handles.push(tokio::spawn(async move {
                if i % 2 == 0 {
                    tx.send(cmd.sync().await).ok();
                } else {
                    let tx = tx.clone();
                    cmd.spawn(move |_ctx, result| {
                        tx.send(result).ok();
                    });
                }
            }));
        }
        drop(tx);
        for handle in handles {
            handle.await.unwrap();
        }

        let mut winners = 0;
        let mut losers = 0;
        while let Some(result) = rx.recv().await {
            match result {
                Ok(_) => winners += 1,
                Err(DeeplError::CommandClosed) => losers += 1,
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }
        assert_eq!(winners, 1);
        assert_eq!(losers, 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_context_is_forwarded_to_callback() {
        let ctx = CancellationToken::new();
        let cmd = Command::new(ctx.clone(), async { Ok(0) });

        let (tx, rx) = tokio::sync::oneshot::channel();
        cmd.spawn(move |ctx, _result| {
            tx.send(ctx).ok();
        });

        let forwarded = rx.await.unwrap();
        ctx.cancel();
        assert!(forwarded.is_cancelled(), "回调收到的应是原上下文");
    }
}
