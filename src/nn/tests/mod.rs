mod activation;
mod network_predict;
mod train_config;
