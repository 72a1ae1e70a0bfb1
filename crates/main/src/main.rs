//! 主应用程序入口
//!
//! 启动 Axum Web API 服务。

use std::sync::Arc;

use application::{
    services::{
        CheckInService, CheckInServiceDependencies, GymService, GymServiceDependencies,
        UserService, UserServiceDependencies,
    },
    Clock, PasswordHasher, SystemClock,
};
use config::AppConfig;
use infrastructure::{create_pg_pool, BcryptPasswordHasher, PgStorage, MIGRATOR};
use tracing_subscriber::EnvFilter;
use web_api::{router, AppState, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 读取环境变量配置
    let config = AppConfig::from_env_with_defaults();
    config.validate()?;

    tracing::info!(
        "连接数据库: {}",
        config.database.url.split('@').last().unwrap_or("unknown")
    );

    let pg_pool = create_pg_pool(&config.database.url, config.database.max_connections).await?;

    // 运行迁移
    MIGRATOR.run(&pg_pool).await?;

    let storage = PgStorage::new(pg_pool);

    // 创建外部适配器
    let password_hasher: Arc<dyn PasswordHasher> =
        Arc::new(BcryptPasswordHasher::new(config.server.bcrypt_cost));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    // 创建应用层服务
    let user_service = Arc::new(UserService::new(UserServiceDependencies {
        user_repository: storage.user_repository.clone(),
        password_hasher,
        clock: clock.clone(),
    }));

    let gym_service = Arc::new(GymService::new(GymServiceDependencies {
        gym_repository: storage.gym_repository.clone(),
        clock: clock.clone(),
    }));

    let check_in_service = Arc::new(CheckInService::new(CheckInServiceDependencies {
        check_in_repository: storage.check_in_repository.clone(),
        gym_repository: storage.gym_repository.clone(),
        clock,
    }));

    // 创建 JWT 服务
    let jwt_service = Arc::new(JwtService::new(config.jwt.clone()));

    // 创建应用状态
    let state = AppState::new(user_service, gym_service, check_in_service, jwt_service);

    // 启动 Web 服务器
    let app = router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("打卡服务启动在 http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
