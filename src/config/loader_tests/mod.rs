mod mock_fs;
