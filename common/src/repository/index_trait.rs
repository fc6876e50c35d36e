use mongodb::IndexModel;

/// 实体声明的 Mongo 索引，仓库初始化时创建
pub trait MongoIndexModelProvider {
    fn index_models() -> Vec<IndexModel>;
}
