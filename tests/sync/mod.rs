mod full_sync_without_remote_warns;
